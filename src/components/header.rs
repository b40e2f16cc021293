use crate::navigation::NavigatorHandle;
use crate::routes::AppRoute;
use leptos::prelude::*;

pub const TITLE: &str = "Udacitrivia";

/// One clickable header label and the action its click runs.
#[derive(Clone)]
struct HeaderLabel {
    text: &'static str,
    navigator: NavigatorHandle,
    route: AppRoute,
}

impl HeaderLabel {
    fn click(&self) {
        if let Err(err) = self.navigator.navigate(self.route) {
            tracing::warn!(route = %self.route, error = %err, "header navigation failed");
        }
    }
}

fn header_labels(navigator: &NavigatorHandle) -> Vec<HeaderLabel> {
    AppRoute::ALL
        .into_iter()
        .map(|route| HeaderLabel {
            text: route.label(),
            navigator: navigator.clone(),
            route,
        })
        .collect()
}

#[component]
pub fn Header() -> impl IntoView {
    let navigator = use_context::<NavigatorHandle>().unwrap_or_default();

    let labels = header_labels(&navigator)
        .into_iter()
        .map(|label| {
            let text = label.text;
            view! {
                <h2
                    class="cursor-pointer text-lg font-medium hover:text-sky-300 transition-colors"
                    on:click=move |_| label.click()
                >
                    {text}
                </h2>
            }
        })
        .collect_view();

    view! {
        <header class="w-full flex items-center gap-8 px-6 py-4 shadow-md bg-slate-800 text-white">
            <h1 class="text-2xl font-semibold cursor-default">{TITLE}</h1>
            {labels}
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::RecordingNavigator;
    use std::sync::Arc;

    fn recorder() -> Arc<RecordingNavigator> {
        Arc::new(RecordingNavigator::new("http://localhost:3000"))
    }

    #[test]
    fn clicking_each_label_navigates_to_its_target() {
        let recorder = recorder();
        let labels = header_labels(&NavigatorHandle::from_arc(recorder.clone()));

        let mut clicked = Vec::new();
        for label in &labels {
            label.click();
            clicked.push((label.text, recorder.assigned().last().cloned()));
        }

        assert_eq!(
            clicked,
            vec![
                ("List", Some("http://localhost:3000".to_string())),
                ("Add", Some("http://localhost:3000/add".to_string())),
                ("Play", Some("http://localhost:3000/play".to_string())),
            ]
        );
        assert_eq!(recorder.assigned().len(), 3);
    }

    #[test]
    fn building_labels_does_not_navigate() {
        let recorder = recorder();
        let labels = header_labels(&NavigatorHandle::from_arc(recorder.clone()));
        assert_eq!(labels.len(), 3);
        assert!(recorder.assigned().is_empty());
    }

    #[test]
    fn repeated_click_navigates_again() {
        let recorder = recorder();
        let labels = header_labels(&NavigatorHandle::from_arc(recorder.clone()));
        labels[1].click();
        labels[1].click();
        assert_eq!(
            recorder.assigned(),
            vec!["http://localhost:3000/add", "http://localhost:3000/add"]
        );
    }

    #[test]
    fn click_without_browser_is_logged_not_raised() {
        let labels = header_labels(&NavigatorHandle::default());
        labels[2].click();
    }

    #[cfg(feature = "ssr")]
    mod render {
        use super::*;

        fn render_with(recorder: Arc<RecordingNavigator>) -> String {
            let owner = Owner::new();
            owner.with(|| {
                provide_context(NavigatorHandle::from_arc(recorder));
                view! { <Header /> }.to_html()
            })
        }

        fn visible_text(html: &str) -> Vec<String> {
            let mut texts = Vec::new();
            let mut rest = html;
            while let Some(end) = rest.find('<') {
                let text = rest[..end].trim();
                if !text.is_empty() {
                    texts.push(text.to_string());
                }
                match rest[end..].find('>') {
                    Some(close) => rest = &rest[end + close + 1..],
                    None => break,
                }
            }
            texts
        }

        #[test]
        fn renders_title_and_labels_only() {
            let html = render_with(recorder());
            assert_eq!(visible_text(&html), ["Udacitrivia", "List", "Add", "Play"]);
        }

        #[test]
        fn rendering_does_not_navigate() {
            let recorder = recorder();
            let _ = render_with(recorder.clone());
            assert!(recorder.assigned().is_empty());
        }
    }
}

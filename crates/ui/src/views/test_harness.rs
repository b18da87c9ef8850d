use std::sync::Arc;

use api::{Backend, InMemoryRepository};
use blitz_core::report::ReportOptions;
use blitz_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, ReportSettings};
use tempfile::TempDir;

use crate::context::{AppContext, UiApp, build_app_context};
use crate::platform::LinkOpener;
use crate::views::{DashboardView, GroupDetailView, GroupsView, MapView, ReportsView};

struct NoLinks;

impl LinkOpener for NoLinks {
    fn open_url(&self, _url: &str) {}
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Dashboard,
    Groups,
    GroupDetail(String),
    Map,
    Reports,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app).with_link_opener(Arc::new(NoLinks)));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Groups => rsx! { GroupsView {} },
        ViewKind::GroupDetail(group_id) => rsx! { GroupDetailView { group_id } },
        ViewKind::Map => rsx! { MapView {} },
        ViewKind::Reports => rsx! { ReportsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    /// Same services the rendered view talks to.
    pub context: AppContext,
    pub report_dir: TempDir,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let pending resources resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, repo: &InMemoryRepository) -> ViewHarness {
    setup_view_harness_with_backend(view, Backend::from_in_memory(repo))
}

pub fn setup_view_harness_with_backend(view: ViewKind, backend: Backend) -> ViewHarness {
    let report_dir = tempfile::tempdir().expect("tempdir");
    let app = Arc::new(AppServices::from_backend(
        &backend,
        fixed_clock(),
        ReportSettings {
            output_dir: report_dir.path().to_path_buf(),
            options: ReportOptions::default(),
        },
    ));

    let ui_app: Arc<dyn UiApp> = app.clone();
    let context = build_app_context(&ui_app).with_link_opener(Arc::new(NoLinks));
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        context,
        report_dir,
    }
}

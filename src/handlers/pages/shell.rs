use serde::Serialize;

use crate::middleware::{ApiResult, IntoApiResponse};

/// Sidebar entry in the admin shell
#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub key: &'static str,
    pub label: &'static str,
    pub path: &'static str,
}

pub const SIDEBAR: &[NavItem] = &[
    NavItem { key: "dashboard", label: "Dashboard", path: "/" },
    NavItem { key: "copyright", label: "Copyright", path: "/copyright" },
    NavItem { key: "editor", label: "Editor", path: "/editor" },
];

#[derive(Debug, Serialize)]
pub struct Shell {
    pub title: &'static str,
    pub active: &'static str,
    pub sidebar: &'static [NavItem],
    pub logout: &'static str,
}

impl Shell {
    pub fn new(active: &'static str) -> Self {
        Self {
            title: "Blog Admin",
            active,
            sidebar: SIDEBAR,
            logout: "/api/logout",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardPage {
    pub page: &'static str,
    pub shell: Shell,
}

/// GET / - admin shell with the sidebar and header
pub async fn dashboard_page() -> ApiResult<DashboardPage> {
    Ok(DashboardPage {
        page: "dashboard",
        shell: Shell::new("dashboard"),
    }
    .into_api_response())
}

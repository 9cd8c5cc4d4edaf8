use crate::routes::LayoutRoute;

pub struct NavItem {
    pub label: String,
    pub url: String,
    pub is_active: bool,
}

/// Sidebar entries for a layout, one per child route, marking the current path.
pub fn find_navigation(layout: &LayoutRoute, current_path: &str) -> Vec<NavItem> {
    let current = current_path.trim_end_matches('/');
    layout
        .children
        .iter()
        .map(|route| {
            let url = route.url();
            NavItem {
                is_active: url == current,
                label: route.label.to_string(),
                url,
            }
        })
        .collect()
}

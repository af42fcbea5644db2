use csvq_router::View;

pub fn view_title(view: View) -> &'static str {
    match view {
        View::DataImport => "Data Import",
        View::Query => "Query",
    }
}

/// Minimal page shell for a view; the real UI is loaded as modules on
/// top of this in development.
pub fn render_view(view: View) -> String {
    let title = view_title(view);
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>csvq - {}</title></head>\n<body>\n<div id=\"app\" data-view=\"{}\"></div>\n</body>\n</html>\n",
        title, title
    )
}

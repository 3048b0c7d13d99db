//! Route definitions for the booking page

/// All routes defined in the application
pub const ROUTES: &[(&str, &str, &str)] = &[
    // Page routes
    ("GET", "/", "New booking page view"),
    ("GET", "/views/{id}", "Existing page view"),

    // HTMX routes
    ("POST", "/views/{id}/fields/{field}", "Update one form field"),
    ("POST", "/views/{id}/bookings", "Submit a repair booking"),
    ("GET", "/views/{id}/banner", "Success banner slot"),

    // Static assets
    ("GET", "/static/style.css", "CSS stylesheet"),
];

/// Route table as printed at startup
pub fn route_table() -> String {
    let mut out = String::from("\nTechFix Booking Routes:\n");
    out.push_str(&format!("{:-<60}\n", ""));
    for (method, path, desc) in ROUTES {
        out.push_str(&format!("{:6} {:30} {}\n", method, path, desc));
    }
    out
}

/// Print all routes
pub fn print_routes() {
    println!("{}", route_table());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_lists_every_route() {
        let table = route_table();
        for (method, path, _) in ROUTES {
            assert!(table.contains(method));
            assert!(table.contains(path));
        }
        assert_eq!(ROUTES.len(), 6);
    }
}

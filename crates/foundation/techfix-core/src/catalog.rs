//! Static page content

pub const SHOP_NAME: &str = "TechFix Repair Shop";
pub const PAGE_TITLE: &str = "TechFix - Electronics Repair Shop";
pub const PAGE_DESCRIPTION: &str = "Professional electronics repair services for all your devices";

pub const HERO_HEADLINE: &str = "Expert Electronics Repair";
pub const HERO_TAGLINE: &str = "Fast, reliable repairs for smartphones, tablets, laptops, and more";

pub const SUCCESS_MESSAGE: &str =
    "\u{2713} Repair booked successfully! We'll contact you shortly to confirm.";

/// One card in the services grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffering {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

pub const SERVICES: [ServiceOffering; 6] = [
    ServiceOffering {
        icon: "\u{1F4F1}",
        title: "Phone Repair",
        summary: "Screen replacement, battery swap, charging port fix, water damage recovery",
    },
    ServiceOffering {
        icon: "\u{1F4BB}",
        title: "Laptop Repair",
        summary: "Keyboard replacement, screen repair, SSD upgrade, motherboard diagnostics",
    },
    ServiceOffering {
        icon: "\u{1F4DF}",
        title: "Tablet Repair",
        summary: "Digitizer replacement, button repair, software troubleshooting",
    },
    ServiceOffering {
        icon: "\u{1F3AE}",
        title: "Gaming Console",
        summary: "HDMI port fix, disc drive repair, controller repair, overheating issues",
    },
    ServiceOffering {
        icon: "\u{231A}",
        title: "Smartwatch",
        summary: "Battery replacement, screen repair, band replacement, sync issues",
    },
    ServiceOffering {
        icon: "\u{1F50C}",
        title: "Other Electronics",
        summary: "Speakers, headphones, cameras, and more. Contact us for a quote!",
    },
];

/// Footer column: heading plus lines
pub type FooterSection = (&'static str, &'static [&'static str]);

pub const FOOTER_SECTIONS: [FooterSection; 3] = [
    (
        "Contact Us",
        &[
            "\u{1F4CD} 123 Tech Street, Silicon Valley, CA 94025",
            "\u{1F4DE} (555) 123-4567",
            "\u{2709}\u{FE0F} info@techfixrepair.com",
        ],
    ),
    (
        "Hours",
        &[
            "Monday - Friday: 9AM - 7PM",
            "Saturday: 10AM - 6PM",
            "Sunday: Closed",
        ],
    ),
    (
        "Warranty",
        &[
            "All repairs come with a 90-day warranty on parts and labor",
            "Free diagnostics for all devices",
        ],
    ),
];

pub const COPYRIGHT: &str = "\u{A9} 2025 TechFix Repair Shop. All rights reserved.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_services_with_unique_titles() {
        let mut titles: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), 6);
    }

    #[test]
    fn test_footer_sections() {
        let headings: Vec<&str> = FOOTER_SECTIONS.iter().map(|(h, _)| *h).collect();
        assert_eq!(headings, vec!["Contact Us", "Hours", "Warranty"]);
    }
}

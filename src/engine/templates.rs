/// Absolute tolerance used when matching an image ratio against a
/// template's accepted set.
pub const RATIO_TOLERANCE: f64 = 0.1;

/// Visual baseline for a known payment platform. The numeric fields feed
/// the geometry check; the descriptors only feed prompt construction.
#[derive(Debug, Clone, Copy)]
pub struct PlatformTemplate {
    pub name: &'static str,
    pub primary_color: &'static str,
    /// Accepted height/width ratios.
    pub aspect_ratios: &'static [f64],
    pub font_family: &'static str,
    pub branding: &'static str,
    pub structure: &'static str,
}

pub static TEMPLATES: &[PlatformTemplate] = &[
    PlatformTemplate {
        name: "Google Pay",
        primary_color: "#1a73e8",
        aspect_ratios: &[2.1667, 2.2222],
        font_family: "Google Sans / Roboto",
        branding: "Multicolour G mark on a white background, blue primary action button",
        structure: "Status header with the amount, recipient card with avatar, UPI transaction ID in the footer",
    },
    PlatformTemplate {
        name: "PhonePe",
        primary_color: "#5f259f",
        aspect_ratios: &[2.0, 2.1667],
        font_family: "Euclid Circular / Roboto",
        branding: "White logotype on a deep purple canvas",
        structure: "Full-bleed purple header, white amount panel, transaction ID and bank reference rows below",
    },
    PlatformTemplate {
        name: "Paytm",
        primary_color: "#00baf2",
        aspect_ratios: &[2.0, 2.1667],
        font_family: "Inter / Roboto",
        branding: "Paytm wordmark in navy and light blue",
        structure: "Blue success banner, centre-aligned amount, wallet balance strip at the bottom",
    },
    PlatformTemplate {
        name: "PayPal",
        primary_color: "#003087",
        aspect_ratios: &[1.3333, 1.7778],
        font_family: "PayPal Sans / Helvetica Neue",
        branding: "Twin-P monogram, navy header on white",
        structure: "Confirmation headline, amount and fee breakdown table, transaction ID and seller details",
    },
];

/// Case-sensitive exact lookup. An unknown platform means "no structural
/// check possible", never a mismatch.
#[must_use]
pub fn find_template(name: &str) -> Option<&'static PlatformTemplate> {
    TEMPLATES.iter().find(|t| t.name == name)
}

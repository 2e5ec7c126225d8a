use crate::components::reveal::{RevealSettings, StaggerConfig};

// Each visual skin is a configuration value, not a code fork: color and
// type tokens, reveal timing, and the dealer form's copy. Section markup
// and CSS live with the page that owns them.

#[derive(Debug, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: &'static str,
    pub surface: &'static str,
    pub ink: &'static str,
    pub accent: &'static str,
    pub muted: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FieldCopy {
    pub label: &'static str,
    pub placeholder: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FormCopy {
    pub name: FieldCopy,
    pub business: FieldCopy,
    pub email: FieldCopy,
    pub phone: FieldCopy,
    pub location: FieldCopy,
    pub message: FieldCopy,
    pub submit_label: &'static str,
    pub fine_print: &'static str,
    pub confirm_glyph: &'static str,
    pub confirm_heading: &'static str,
    pub confirm_body: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Theme {
    pub slug: &'static str,
    pub colors: ThemeColors,
    pub font_display: &'static str,
    pub font_body: &'static str,
    pub reveal: RevealSettings,
    pub form: FormCopy,
}

impl Theme {
    /// Inline style for a page root, exposing the tokens to the page's
    /// stylesheet as CSS custom properties.
    pub fn css_vars(&self) -> String {
        format!(
            "--bg: {}; --surface: {}; --ink: {}; --accent: {}; --muted: {}; \
             --font-display: {}; --font-body: {};",
            self.colors.background,
            self.colors.surface,
            self.colors.ink,
            self.colors.accent,
            self.colors.muted,
            self.font_display,
            self.font_body,
        )
    }
}

pub static BRUTALIST: Theme = Theme {
    slug: "brutalist",
    colors: ThemeColors {
        background: "#000000",
        surface: "#ffffff",
        ink: "#000000",
        accent: "#E31937",
        muted: "rgba(255, 255, 255, 0.8)",
    },
    font_display: "'Archivo Black', 'Arial Black', sans-serif",
    font_body: "'Archivo', Arial, sans-serif",
    reveal: RevealSettings {
        margin: "-50px",
        duration_ms: 400,
        offset_px: 20,
        easing: "ease",
        stagger: StaggerConfig::new(0, 50),
    },
    form: FormCopy {
        name: FieldCopy { label: "Name *", placeholder: "YOUR NAME" },
        business: FieldCopy { label: "Business *", placeholder: "BUSINESS NAME" },
        email: FieldCopy { label: "Email *", placeholder: "EMAIL" },
        phone: FieldCopy { label: "Phone", placeholder: "PHONE" },
        location: FieldCopy { label: "Location *", placeholder: "CITY, STATE" },
        message: FieldCopy { label: "Message", placeholder: "YOUR MESSAGE" },
        submit_label: "SUBMIT →",
        fine_print: "",
        confirm_glyph: "✓",
        confirm_heading: "THANKS!",
        confirm_body: "APPLICATION SUBMITTED. WE'LL BE IN TOUCH IN 2-3 DAYS.",
    },
};

pub static CYBERPUNK: Theme = Theme {
    slug: "cyberpunk",
    colors: ThemeColors {
        background: "#000000",
        surface: "#0a0a0a",
        ink: "#ffffff",
        accent: "#E31937",
        muted: "#9ca3af",
    },
    font_display: "'Share Tech Mono', 'Courier New', monospace",
    font_body: "'Share Tech Mono', 'Courier New', monospace",
    reveal: RevealSettings {
        margin: "-100px",
        duration_ms: 600,
        offset_px: 60,
        easing: "ease-out",
        stagger: StaggerConfig::new(0, 100),
    },
    form: FormCopy {
        name: FieldCopy { label: "NAME *", placeholder: "Enter name..." },
        business: FieldCopy { label: "BUSINESS *", placeholder: "Enter business..." },
        email: FieldCopy { label: "EMAIL *", placeholder: "Enter email..." },
        phone: FieldCopy { label: "PHONE", placeholder: "Enter phone..." },
        location: FieldCopy { label: "LOCATION *", placeholder: "City, State" },
        message: FieldCopy { label: "MESSAGE [OPTIONAL]", placeholder: "Additional details..." },
        submit_label: "[ SECURE_DEALER_SPOT ]",
        fine_print: "// By submitting, you agree to dealer protocol",
        confirm_glyph: "[ ✓ ]",
        confirm_heading: "TRANSMISSION_COMPLETE",
        confirm_body: "> Your request has been logged. Contact within 2-3 business days.",
    },
};

pub static EDITORIAL: Theme = Theme {
    slug: "editorial",
    colors: ThemeColors {
        background: "#ffffff",
        surface: "#f8f8f8",
        ink: "#111111",
        accent: "#E31937",
        muted: "#6b7280",
    },
    font_display: "Georgia, 'Times New Roman', serif",
    font_body: "'Helvetica Neue', Helvetica, Arial, sans-serif",
    reveal: RevealSettings {
        margin: "-50px",
        duration_ms: 600,
        offset_px: 40,
        easing: "ease-out",
        stagger: StaggerConfig::new(0, 150),
    },
    form: FormCopy {
        name: FieldCopy { label: "Your Name *", placeholder: "John Smith" },
        business: FieldCopy { label: "Business Name *", placeholder: "XYZ Motorsports" },
        email: FieldCopy { label: "Email Address *", placeholder: "john@company.com" },
        phone: FieldCopy { label: "Phone Number", placeholder: "(555) 123-4567" },
        location: FieldCopy { label: "Location *", placeholder: "City, State" },
        message: FieldCopy {
            label: "Message (Optional)",
            placeholder: "Tell us about your dealership experience...",
        },
        submit_label: "Submit Application",
        fine_print: "By submitting, you agree to be contacted by our dealer team.",
        confirm_glyph: "✓",
        confirm_heading: "Thank You!",
        confirm_body: "Your dealer application has been submitted. Our team will contact you \
                       within 2-3 business days.",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_have_distinct_slugs() {
        let slugs = [BRUTALIST.slug, CYBERPUNK.slug, EDITORIAL.slug];
        for (index, slug) in slugs.iter().enumerate() {
            assert!(!slugs[index + 1..].contains(slug));
        }
    }

    #[test]
    fn css_vars_expose_every_token() {
        let vars = EDITORIAL.css_vars();
        for name in ["--bg", "--surface", "--ink", "--accent", "--muted", "--font-display", "--font-body"] {
            assert!(vars.contains(name), "missing {name}");
        }
    }
}

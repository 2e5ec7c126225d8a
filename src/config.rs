// Site-wide constants shared across pages.

pub const BRAND: &str = "HOOGA";
pub const BRAND_SUFFIX: &str = "E-POWERSPORTS";
pub const PARENT_COMPANY: &str = "FS Performance";
pub const HQ_CITY: &str = "Vista, CA";
pub const HQ_ADDRESS: &str = "Vista, CA 92081";
pub const TAGLINE: &str = "Adapt. Transform. Lead.";

pub const CONTACT_PHONE: &str = "(888) 905-8243";
pub const CONTACT_PHONE_HREF: &str = "tel:8889058243";
pub const CONTACT_EMAIL: &str = "dealers@hoogapowersports.com";
pub const CONTACT_EMAIL_HREF: &str = "mailto:dealers@hoogapowersports.com";
pub const SITE_DOMAIN: &str = "hoogapowersports.com";
pub const SITE_URL: &str = "https://hoogapowersports.com";

pub const HERO_VIDEO: &str = "/videos/hooga-video1.mp4";
pub const HERO_IMAGE: &str = "/images/hooga-hero.png";

pub const COPYRIGHT: &str = "© 2026 HOOGA E-Powersports by FS Performance. All rights reserved.";

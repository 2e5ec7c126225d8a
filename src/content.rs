// Catalog and partnership content shared by every theme skin. The skins
// restyle these records; none of them owns a private copy.

#[derive(Debug, PartialEq, Eq)]
pub struct SpecItem {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub model_code: &'static str,
    pub tagline: &'static str,
    pub specs: [SpecItem; 6],
    pub colors: [&'static str; 3],
    pub image: &'static str,
    pub featured: bool,
}

pub const RIDING_MODES: [&str; 3] = ["ECO", "SPORTS", "BEAST"];

pub static PRODUCTS: [Product; 2] = [
    Product {
        name: "HOOGA 8850",
        model_code: "8850",
        tagline: "Flagship Performance",
        specs: [
            SpecItem { label: "Top Speed", value: "115 km/h" },
            SpecItem { label: "Range", value: "140 km" },
            SpecItem { label: "Power", value: "25 kW" },
            SpecItem { label: "Battery", value: "88V 50Ah" },
            SpecItem { label: "Charge Time", value: "3.5 hrs" },
            SpecItem { label: "Seat Heights", value: "900mm / 845mm" },
        ],
        colors: ["Rave Red", "Storm Grey", "Arctic White"],
        image: "/images/page-06.png",
        featured: true,
    },
    Product {
        name: "HOOGA 7270",
        model_code: "7270",
        tagline: "Long Range Champion",
        specs: [
            SpecItem { label: "Top Speed", value: "100 km/h" },
            SpecItem { label: "Range", value: "180 km" },
            SpecItem { label: "Power", value: "16 kW" },
            SpecItem { label: "Battery", value: "72V 70Ah" },
            SpecItem { label: "Charge Time", value: "4.5 hrs" },
            SpecItem { label: "Seat Heights", value: "900mm / 845mm" },
        ],
        colors: ["Rave Red", "Storm Grey", "Arctic White"],
        image: "/images/page-15.png",
        featured: false,
    },
];

#[derive(Debug, PartialEq, Eq)]
pub struct VariantConfig {
    pub name: &'static str,
    pub wheel: &'static str,
    pub description: &'static str,
    pub highlights: [&'static str; 3],
}

pub static VARIANTS: [VariantConfig; 3] = [
    VariantConfig {
        name: "Street",
        wheel: "19/18",
        description: "Urban-ready with street tires for city dominance",
        highlights: ["Street tires", "Urban suspension", "DOT brakes"],
    },
    VariantConfig {
        name: "Trail",
        wheel: "21/18",
        description: "Knobby tires and extended travel for off-road adventures",
        highlights: ["Knobby tires", "KKE 240mm suspension", "Reinforced frame"],
    },
    VariantConfig {
        name: "Supermoto",
        wheel: "17/17",
        description: "Track-focused setup for maximum cornering aggression",
        highlights: ["Slick tires", "Sport suspension", "Quick-release wheels"],
    },
];

#[derive(Debug, PartialEq, Eq)]
pub struct BodyStyle {
    pub name: &'static str,
    pub description: &'static str,
}

pub static BODY_STYLES: [BodyStyle; 2] = [
    BodyStyle {
        name: "Semi-Shroud",
        description: "Minimal coverage, maximum performance",
    },
    BodyStyle {
        name: "Full-Fairing",
        description: "Complete wind protection, aerodynamic",
    },
];

#[derive(Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub static FEATURES: [Feature; 8] = [
    Feature {
        title: "3-in-1 Light Module",
        blurb: "Advanced headlight, DRL, and amber lighting all in one unit",
    },
    Feature {
        title: "Dual Battery System",
        blurb: "Quick-remove straps for easy swapping and extended range",
    },
    Feature {
        title: "Battery Lock & Indicator",
        blurb: "Secure locking system with integrated charge status",
    },
    Feature {
        title: "Aluminum Bash Plate",
        blurb: "High-strength protection for rough terrain",
    },
    Feature {
        title: "External Charging Port",
        blurb: "Charge anywhere without removing the battery",
    },
    Feature {
        title: "Chain Drive Motor",
        blurb: "Electric mid-mount motor with reliable chain drive",
    },
    Feature {
        title: "KKE Suspension",
        blurb: "240mm front and rear travel for any terrain",
    },
    Feature {
        title: "Rear Foot Brake",
        blurb: "Optional rear foot-brake for custom riding style",
    },
];

#[derive(Debug, PartialEq, Eq)]
pub struct Benefit {
    pub stat: &'static str,
    pub label: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub static BENEFITS: [Benefit; 4] = [
    Benefit {
        stat: "40%",
        label: "YoY Growth",
        title: "Exploding EV Market",
        blurb: "The electric powersports market is growing 40%+ annually",
    },
    Benefit {
        stat: "0",
        label: "Gas & Oil",
        title: "Zero Fluids",
        blurb: "Service stays busy with upgrades and accessories, not oil changes",
    },
    Benefit {
        stat: "Full",
        label: "Support",
        title: "Turnkey Program",
        blurb: "POP displays, digital assets, product training, dedicated B2B portal",
    },
    Benefit {
        stat: "6",
        label: "Per Model",
        title: "Six Configurations",
        blurb: "Three variants, two body styles. Fewer SKUs, more customers",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_exactly_one_flagship() {
        assert_eq!(PRODUCTS.iter().filter(|product| product.featured).count(), 1);
    }

    #[test]
    fn every_product_lists_the_same_spec_labels() {
        let labels =
            |product: &'static Product| product.specs.iter().map(|spec| spec.label).collect::<Vec<_>>();
        assert_eq!(labels(&PRODUCTS[0]), labels(&PRODUCTS[1]));
    }
}

//! The compiled-in catalog.
//!
//! Product records are defined at process start and never mutated. Related
//! ids may reference products that are not (yet) listed; queries skip them.

use crate::product::{Category, Product, Specification, TradeInfo};
use once_cell::sync::Lazy;

fn s(value: &str) -> String {
    value.to_string()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| s(v)).collect()
}

fn spec(parameter: &str, value: &str) -> Specification {
    Specification {
        parameter: s(parameter),
        value: s(value),
    }
}

static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        // Tea
        Product {
            id: s("bop-assam-tea"),
            name: s("BOP Assam Tea"),
            category: Category::Tea,
            subcategory: Some(s("assam")),
            short_description: s(
                "Premium Broken Orange Pekoe Assam tea with bold granules and malty flavor profile.",
            ),
            full_description: s(
                "Our BOP Assam Tea represents the finest quality CTC tea from the renowned tea \
                 gardens of Assam. Known for its robust flavor, bright golden brew, and distinctive \
                 malty aroma, this tea is perfect for both domestic consumption and export markets. \
                 The bold granules ensure excellent brewing characteristics.",
            ),
            images: strings(&[
                "https://images.unsplash.com/photo-1558618047-3c8c76ca7d13?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
                "https://images.unsplash.com/photo-1571934811356-5cc061b6821f?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
                "https://images.unsplash.com/photo-1576092768241-dec231879fc3?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            ]),
            specifications: vec![
                spec("Grade", "BOP"),
                spec("Type", "Assam CTC"),
                spec("Origin", "Assam, India"),
                spec("Moisture", "\u{2264} 8%"),
                spec("Colour", "Bright golden brew"),
                spec("Aroma", "Malty"),
                spec("Appearance", "Bold granules"),
                spec("Caffeine", "Medium"),
                spec("Shelf Life", "12 Months"),
            ],
            hs_code: Some(s("0902.30.00")),
            packaging: strings(&["25kg PP Bags", "50kg Jute Bags", "Custom Packaging"]),
            moq: s("1 MT"),
            availability: s("In Stock"),
            trade_info: TradeInfo {
                fob: None,
                port: s("Kolkata"),
                lead_time: s("5-10 days"),
                payment_terms: s("TT 30% advance, 70% against scanned documents"),
            },
            related_products: strings(&["bopsm-assam-tea", "bopl-assam-tea", "dust-assam-tea"]),
        },
        Product {
            id: s("bopsm-assam-tea"),
            name: s("BOPSM Assam Tea"),
            category: Category::Tea,
            subcategory: Some(s("assam")),
            short_description: s(
                "Broken Orange Pekoe Small Medium grade Assam tea with excellent brewing strength.",
            ),
            full_description: s(
                "BOPSM Assam Tea offers the perfect balance of flavor and strength. This \
                 medium-sized leaf grade provides excellent brewing characteristics with a rich, \
                 full-bodied taste that tea connoisseurs appreciate. Ideal for both milk tea \
                 preparations and black tea consumption.",
            ),
            images: strings(&[
                "https://images.unsplash.com/photo-1558618047-3c8c76ca7d13?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
                "https://images.unsplash.com/photo-1571934811356-5cc061b6821f?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            ]),
            specifications: vec![
                spec("Grade", "BOPSM"),
                spec("Type", "Assam CTC"),
                spec("Origin", "Assam, India"),
                spec("Moisture", "\u{2264} 8%"),
                spec("Colour", "Rich amber"),
                spec("Aroma", "Strong malty"),
                spec("Particle Size", "Small-Medium"),
            ],
            hs_code: Some(s("0902.30.00")),
            packaging: strings(&["25kg PP Bags", "50kg Jute Bags"]),
            moq: s("1 MT"),
            availability: s("In Stock"),
            trade_info: TradeInfo {
                fob: None,
                port: s("Kolkata"),
                lead_time: s("5-10 days"),
                payment_terms: s("TT 30% advance, 70% against scanned documents"),
            },
            related_products: strings(&["bop-assam-tea", "bopl-assam-tea", "dust-assam-tea"]),
        },
        // Rice
        Product {
            id: s("1121-basmati-rice"),
            name: s("1121 Basmati Rice"),
            category: Category::Rice,
            subcategory: Some(s("basmati")),
            short_description: s(
                "Premium long-grain 1121 Basmati rice with exceptional aroma and taste.",
            ),
            full_description: s(
                "Our 1121 Basmati Rice is sourced from the foothills of the Himalayas, known for \
                 its extra-long grains, distinctive aroma, and fluffy texture when cooked. This \
                 premium variety is aged to perfection and meets international quality standards \
                 for export markets.",
            ),
            images: strings(&[
                "https://images.unsplash.com/photo-1536304993881-ff6e9eefa2a6?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
                "https://images.unsplash.com/photo-1586201375761-83865001e31c?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            ]),
            specifications: vec![
                spec("Variety", "1121 Basmati"),
                spec("Length", "8.30mm (min)"),
                spec("Moisture", "\u{2264} 12%"),
                spec("Broken", "\u{2264} 2%"),
                spec("Foreign Matter", "\u{2264} 0.1%"),
                spec("Aging", "12+ Months"),
                spec("Aroma", "Natural Basmati"),
            ],
            hs_code: Some(s("1006.30.10")),
            packaging: strings(&["25kg PP Bags", "50kg Jute Bags", "1kg Consumer Packs"]),
            moq: s("1 Container (25 MT)"),
            availability: s("In Stock"),
            trade_info: TradeInfo {
                fob: None,
                port: s("Mundra/Nhava Sheva"),
                lead_time: s("7-15 days"),
                payment_terms: s("LC at sight or TT 30% advance"),
            },
            related_products: strings(&["traditional-basmati-rice", "sona-masoori-rice"]),
        },
        Product {
            id: s("sona-masoori-rice"),
            name: s("Sona Masoori Rice"),
            category: Category::Rice,
            subcategory: Some(s("non-basmati")),
            short_description: s(
                "Premium non-basmati rice variety known for its light weight and aromatic flavor.",
            ),
            full_description: s(
                "Sona Masoori is a premium variety of rice grown mainly in Andhra Pradesh and \
                 Karnataka. This medium-grain rice is lightweight, aromatic, and cooks perfectly \
                 without breaking. It's ideal for daily consumption and is highly preferred in \
                 South Indian cuisine.",
            ),
            images: strings(&[
                "https://images.unsplash.com/photo-1536304993881-ff6e9eefa2a6?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            ]),
            specifications: vec![
                spec("Variety", "Sona Masoori"),
                spec("Length", "5.0-5.5mm"),
                spec("Moisture", "\u{2264} 14%"),
                spec("Broken", "\u{2264} 5%"),
                spec("Foreign Matter", "\u{2264} 0.1%"),
                spec("Type", "Non-Basmati"),
            ],
            hs_code: Some(s("1006.30.90")),
            packaging: strings(&["25kg PP Bags", "50kg Jute Bags"]),
            moq: s("1 Container (25 MT)"),
            availability: s("In Stock"),
            trade_info: TradeInfo {
                fob: None,
                port: s("Chennai/Visakhapatnam"),
                lead_time: s("7-12 days"),
                payment_terms: s("LC at sight or TT 30% advance"),
            },
            related_products: strings(&["1121-basmati-rice", "ir64-rice"]),
        },
        // Spices
        Product {
            id: s("salem-turmeric"),
            name: s("Salem Turmeric"),
            category: Category::Spices,
            subcategory: Some(s("turmeric")),
            short_description: s(
                "Premium Salem turmeric with high curcumin content and bright yellow color.",
            ),
            full_description: s(
                "Salem Turmeric is renowned for its high curcumin content, bright yellow color, \
                 and superior quality. Grown in the Salem district of Tamil Nadu, this variety is \
                 considered among the finest turmeric available globally, perfect for both \
                 culinary and medicinal applications.",
            ),
            images: strings(&[
                "https://images.unsplash.com/photo-1596040033229-a9821ebd058d?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            ]),
            specifications: vec![
                spec("Origin", "Salem, Tamil Nadu"),
                spec("Curcumin", "6-8%"),
                spec("Moisture", "\u{2264} 10%"),
                spec("Color", "Bright Yellow"),
                spec("Form", "Whole/Powder"),
                spec("Purity", "99%"),
            ],
            hs_code: Some(s("0910.10.00")),
            packaging: strings(&["25kg PP Bags", "50kg Jute Bags", "Custom Packaging"]),
            moq: s("1 MT"),
            availability: s("In Stock"),
            trade_info: TradeInfo {
                fob: None,
                port: s("Chennai/Tuticorin"),
                lead_time: s("5-10 days"),
                payment_terms: s("TT 30% advance, 70% against documents"),
            },
            related_products: strings(&["alleppey-turmeric", "guntur-chilli"]),
        },
        // Wheat
        Product {
            id: s("sharbati-wheat"),
            name: s("Sharbati Wheat"),
            category: Category::Wheat,
            subcategory: None,
            short_description: s(
                "Premium Sharbati wheat variety known for its golden color and excellent milling quality.",
            ),
            full_description: s(
                "Sharbati Wheat is a premium variety grown primarily in Madhya Pradesh. Known for \
                 its golden color, high protein content, and excellent milling quality, it \
                 produces superior quality flour ideal for making chapatis, breads, and other \
                 wheat-based products.",
            ),
            images: strings(&[
                "https://images.unsplash.com/photo-1574323347407-f5e1ad6d020b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            ]),
            specifications: vec![
                spec("Variety", "Sharbati"),
                spec("Protein", "11-13%"),
                spec("Moisture", "\u{2264} 12%"),
                spec("Foreign Matter", "\u{2264} 2%"),
                spec("Test Weight", "78-80 kg/hl"),
                spec("Gluten", "Good Quality"),
            ],
            hs_code: Some(s("1001.99.10")),
            packaging: strings(&["50kg PP Bags", "Custom Packaging"]),
            moq: s("1 Container (25 MT)"),
            availability: s("In Stock"),
            trade_info: TradeInfo {
                fob: None,
                port: s("Mundra/JNPT"),
                lead_time: s("10-15 days"),
                payment_terms: s("LC at sight or TT 30% advance"),
            },
            related_products: strings(&["lokwan-wheat", "mp-grade-wheat"]),
        },
    ]
});

/// The full catalog, in display order.
pub fn catalog() -> &'static [Product] {
    &CATALOG
}

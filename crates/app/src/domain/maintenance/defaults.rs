//! Seed data installed on first start and on every reset.
//!
//! Each record is stamped `base_ms + index` so that creation order is
//! unambiguous even within a single millisecond.

use crate::domain::{
    cart::models::{CartItem, DEFAULT_DELIVERY_OPTION_ID},
    delivery_options::models::DeliveryOption,
    orders::models::{Order, OrderLine},
    pricing,
    products::models::{Product, Rating},
};

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    image: &'static str,
    rate: f64,
    count: u32,
    price_cents: u64,
    keywords: &'static [&'static str],
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "e43638ce-6aa0-4b85-b27f-e1d07eb678c6",
        name: "Black and Gray Athletic Cotton Socks - 6 Pairs",
        image: "images/products/athletic-cotton-socks-6-pairs.jpg",
        rate: 4.5,
        count: 87,
        price_cents: 1090,
        keywords: &["socks", "sports", "apparel"],
    },
    CatalogEntry {
        id: "15b6fc6f-327a-4ec4-896f-486349e85a3d",
        name: "Intermediate Size Basketball",
        image: "images/products/intermediate-composite-basketball.jpg",
        rate: 4.0,
        count: 127,
        price_cents: 2095,
        keywords: &["sports", "basketballs"],
    },
    CatalogEntry {
        id: "83d4ca15-0f35-48f5-b7a3-1ea210004f2e",
        name: "Adults Plain Cotton T-Shirt - 2 Pack",
        image: "images/products/adults-plain-cotton-tshirt-2-pack-teal.jpg",
        rate: 4.5,
        count: 56,
        price_cents: 799,
        keywords: &["tshirts", "apparel", "mens"],
    },
    CatalogEntry {
        id: "54e0eccd-8f36-462b-b68a-8182611d9add",
        name: "Black 2 Slot Toaster - Easy Push Lever",
        image: "images/products/black-2-slot-toaster.jpg",
        rate: 5.0,
        count: 2197,
        price_cents: 1899,
        keywords: &["toaster", "kitchen", "appliances"],
    },
    CatalogEntry {
        id: "3ebe75dc-64d2-4137-8860-1f5a963e534b",
        name: "6 Piece White Dinner Plate Set",
        image: "images/products/6-piece-white-dinner-plate-set.jpg",
        rate: 4.0,
        count: 37,
        price_cents: 2067,
        keywords: &["plates", "kitchen", "dining"],
    },
    CatalogEntry {
        id: "8c9c52b5-5a19-4bcb-a5d1-158a74287c53",
        name: "6-Piece Nonstick, Carbon Steel Oven Bakeware Set",
        image: "images/products/6-piece-non-stick-baking-set.webp",
        rate: 4.5,
        count: 175,
        price_cents: 3499,
        keywords: &["kitchen", "cookware"],
    },
    CatalogEntry {
        id: "dd82ca78-a18b-4e2a-9250-31e67412f98d",
        name: "Plain Hooded Fleece Sweatshirt",
        image: "images/products/plain-hooded-fleece-sweatshirt-yellow.jpg",
        rate: 4.5,
        count: 317,
        price_cents: 2400,
        keywords: &["hoodies", "sweaters", "apparel"],
    },
    CatalogEntry {
        id: "77919bbe-0e56-475b-adde-4f24dfed3a04",
        name: "Luxury Towel Set - Graphite Gray",
        image: "images/products/luxury-tower-set-6-piece.jpg",
        rate: 4.5,
        count: 144,
        price_cents: 3599,
        keywords: &["bathroom", "washroom", "towels", "bath towels"],
    },
    CatalogEntry {
        id: "3fdfe8d6-9a15-4979-b459-585b0d0545b9",
        name: "Liquid Laundry Detergent, 110 Loads",
        image: "images/products/liquid-laundry-detergent-plain.jpg",
        rate: 4.5,
        count: 305,
        price_cents: 2899,
        keywords: &["cleaning", "laundry", "detergent"],
    },
    CatalogEntry {
        id: "36c64692-677f-4f58-b5ec-0dc2cf109e27",
        name: "Waterproof Knit Athletic Sneakers - Gray",
        image: "images/products/knit-athletic-sneakers-gray.jpg",
        rate: 4.0,
        count: 89,
        price_cents: 8999,
        keywords: &["shoes", "running shoes", "footwear"],
    },
];

pub(crate) fn default_products(base_ms: i64) -> Vec<Product> {
    CATALOG
        .iter()
        .enumerate()
        .map(|(index, entry)| Product {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            image: entry.image.to_string(),
            rating: Rating {
                rate: entry.rate,
                count: entry.count,
            },
            price_cents: entry.price_cents,
            keywords: entry.keywords.iter().map(ToString::to_string).collect(),
            created_at_ms: base_ms + index as i64,
        })
        .collect()
}

pub(crate) fn default_delivery_options(base_ms: i64) -> Vec<DeliveryOption> {
    [("1", 7, 0), ("2", 3, 499), ("3", 1, 999)]
        .into_iter()
        .enumerate()
        .map(|(index, (id, delivery_days, price_cents))| DeliveryOption {
            id: id.to_string(),
            delivery_days,
            price_cents,
            created_at_ms: base_ms + index as i64,
        })
        .collect()
}

pub(crate) fn default_cart_items(base_ms: i64) -> Vec<CartItem> {
    [
        (CATALOG[0].id, 2, DEFAULT_DELIVERY_OPTION_ID),
        (CATALOG[1].id, 1, "2"),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (product_id, quantity, delivery_option_id))| CartItem {
        id: 0,
        product_id: product_id.to_string(),
        quantity,
        delivery_option_id: delivery_option_id.to_string(),
        created_at_ms: base_ms + index as i64,
    })
    .collect()
}

pub(crate) fn default_orders(base_ms: i64) -> Vec<Order> {
    // One historical order: two pairs of socks shipped free plus a toaster
    // with express shipping.
    let lines = vec![
        OrderLine {
            product_id: CATALOG[0].id.to_string(),
            quantity: 2,
            estimated_delivery_time_ms: base_ms + 7 * pricing::MS_PER_DAY,
        },
        OrderLine {
            product_id: CATALOG[3].id.to_string(),
            quantity: 1,
            estimated_delivery_time_ms: base_ms + pricing::MS_PER_DAY,
        },
    ];

    let pre_tax = 2 * CATALOG[0].price_cents + CATALOG[3].price_cents + 999;

    vec![Order {
        id: "27cba69d-4c3d-4098-b42d-ac7fa62b7664".to_string(),
        order_time_ms: base_ms,
        total_cost_cents: pricing::total_with_tax_cents(pre_tax),
        products: lines,
    }]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn product_ids_are_unique() {
        let products = default_products(0);
        let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn timestamps_increase_with_index() {
        let products = default_products(1_000);

        for (index, product) in products.iter().enumerate() {
            assert_eq!(product.created_at_ms, 1_000 + index as i64);
        }
    }

    #[test]
    fn cart_and_order_rows_reference_catalog_products() {
        let ids: HashSet<_> = default_products(0).into_iter().map(|p| p.id).collect();

        for item in default_cart_items(0) {
            assert!(ids.contains(&item.product_id));
        }

        for order in default_orders(0) {
            for line in &order.products {
                assert!(ids.contains(&line.product_id));
            }
        }
    }

    #[test]
    fn free_delivery_option_is_the_default() {
        let options = default_delivery_options(0);

        let free = options
            .iter()
            .find(|o| o.id == DEFAULT_DELIVERY_OPTION_ID)
            .expect("default option missing");

        assert_eq!(free.price_cents, 0);
        assert_eq!(free.delivery_days, 7);
    }
}

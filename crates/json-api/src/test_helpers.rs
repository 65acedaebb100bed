//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, catcher::Catcher, prelude::*};

use shopfront_app::{
    context::AppContext,
    domain::{
        cart::{MockCartService, models::CartItem},
        delivery_options::{MockDeliveryOptionsService, models::DeliveryOption},
        maintenance::MockMaintenanceService,
        orders::{
            MockOrdersService,
            models::{Order, OrderLine},
        },
        payment::MockPaymentService,
        products::{
            MockProductsService,
            models::{Product, Rating},
        },
    },
};

use crate::{errors, state::State};

pub(crate) fn make_product(id: &str, price_cents: u64) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        image: format!("images/products/{id}.jpg"),
        rating: Rating {
            rate: 4.5,
            count: 87,
        },
        price_cents,
        keywords: vec!["test".to_string()],
        created_at_ms: 0,
    }
}

pub(crate) fn make_delivery_option(id: &str, delivery_days: u32, price_cents: u64) -> DeliveryOption {
    DeliveryOption {
        id: id.to_string(),
        delivery_days,
        price_cents,
        created_at_ms: 0,
    }
}

pub(crate) fn make_cart_item(
    id: i64,
    product_id: &str,
    quantity: u32,
    delivery_option_id: &str,
) -> CartItem {
    CartItem {
        id,
        product_id: product_id.to_string(),
        quantity,
        delivery_option_id: delivery_option_id.to_string(),
        created_at_ms: 0,
    }
}

pub(crate) fn make_order(id: &str, total_cost_cents: u64, product_id: &str) -> Order {
    Order {
        id: id.to_string(),
        order_time_ms: 0,
        total_cost_cents,
        products: vec![OrderLine {
            product_id: product_id.to_string(),
            quantity: 1,
            estimated_delivery_time_ms: 0,
        }],
    }
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();

    products
}

fn strict_delivery_options_mock() -> MockDeliveryOptionsService {
    let mut options = MockDeliveryOptionsService::new();

    options.expect_list_delivery_options().never();
    options.expect_list_with_estimates().never();

    options
}

fn strict_cart_mock() -> MockCartService {
    let mut cart = MockCartService::new();

    cart.expect_list_items().never();
    cart.expect_list_items_with_products().never();
    cart.expect_add_item().never();
    cart.expect_update_item().never();
    cart.expect_remove_item().never();

    cart
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_list_orders().never();
    orders.expect_list_orders_expanded().never();
    orders.expect_get_order().never();
    orders.expect_get_order_expanded().never();
    orders.expect_place_order().never();

    orders
}

fn strict_payment_mock() -> MockPaymentService {
    let mut payment = MockPaymentService::new();

    payment.expect_payment_summary().never();

    payment
}

fn strict_maintenance_mock() -> MockMaintenanceService {
    let mut maintenance = MockMaintenanceService::new();

    maintenance.expect_reset().never();

    maintenance
}

/// Context where every service is a strict mock expecting zero calls.
fn strict_app_context() -> AppContext {
    AppContext {
        products: Arc::new(strict_products_mock()),
        delivery_options: Arc::new(strict_delivery_options_mock()),
        cart: Arc::new(strict_cart_mock()),
        orders: Arc::new(strict_orders_mock()),
        payment: Arc::new(strict_payment_mock()),
        maintenance: Arc::new(strict_maintenance_mock()),
    }
}

/// State where every service is a strict mock expecting zero calls.
pub(crate) fn strict_state() -> Arc<State> {
    Arc::new(State::new(strict_app_context()))
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    let mut app = strict_app_context();
    app.products = Arc::new(products);

    Arc::new(State::new(app))
}

pub(crate) fn state_with_delivery_options(options: MockDeliveryOptionsService) -> Arc<State> {
    let mut app = strict_app_context();
    app.delivery_options = Arc::new(options);

    Arc::new(State::new(app))
}

pub(crate) fn state_with_cart(cart: MockCartService) -> Arc<State> {
    let mut app = strict_app_context();
    app.cart = Arc::new(cart);

    Arc::new(State::new(app))
}

pub(crate) fn state_with_orders(orders: MockOrdersService) -> Arc<State> {
    let mut app = strict_app_context();
    app.orders = Arc::new(orders);

    Arc::new(State::new(app))
}

pub(crate) fn state_with_payment(payment: MockPaymentService) -> Arc<State> {
    let mut app = strict_app_context();
    app.payment = Arc::new(payment);

    Arc::new(State::new(app))
}

pub(crate) fn state_with_maintenance(maintenance: MockMaintenanceService) -> Arc<State> {
    let mut app = strict_app_context();
    app.maintenance = Arc::new(maintenance);

    Arc::new(State::new(app))
}

/// Build a service with the state injected and the JSON error catcher
/// installed, mirroring the production pipeline.
pub(crate) fn service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
        .catcher(Catcher::default().hoop(errors::format_unhandled))
}

//! App Router

use std::sync::Arc;

use salvo::{
    affix_state::inject, catch_panic::CatchPanic, catcher::Catcher, prelude::*,
    trailing_slash::remove_slash,
};

use crate::{
    cart_items, delivery_options, errors, healthcheck, orders, payment_summary, products, reset,
    state::State,
};

/// All storefront routes, rooted at `/api`.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .push(Router::with_path("products").get(products::index))
        .push(Router::with_path("delivery-options").get(delivery_options::index))
        .push(
            Router::with_path("cart-items")
                .get(cart_items::handlers::index::handler)
                .post(cart_items::handlers::create::handler)
                .push(
                    Router::with_path("{productId}")
                        .put(cart_items::handlers::update::handler)
                        .delete(cart_items::handlers::delete::handler),
                ),
        )
        .push(
            Router::with_path("orders")
                .get(orders::handlers::index::handler)
                .post(orders::handlers::create::handler)
                .push(Router::with_path("{orderId}").get(orders::handlers::get::handler)),
        )
        .push(Router::with_path("payment-summary").get(payment_summary::get))
        .push(Router::with_path("reset").post(reset::create))
}

/// Full HTTP service: routes, middleware and the JSON error catcher.
pub(crate) fn app_service(state: Arc<State>) -> Service {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(api_router());

    Service::new(router).catcher(Catcher::default().hoop(errors::format_unhandled))
}

//! API routes for coop-server

pub mod auth;
pub mod bill;
pub mod egg;
pub mod egg_type;
pub mod health;
pub mod order;
pub mod order_item;
pub mod payment;
pub mod report;
pub mod role;
pub mod supplier;
pub mod user;
pub mod visit;

use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

/// Handler result: JSON body or an error rendered as `{"detail": ...}`
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    let user = Router::new()
        .route("/", axum::routing::post(user::create_user).get(user::list_users))
        .route("/search/me", get(user::me))
        .route(
            "/{user_id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/byrole/{role_id}", get(user::list_users_by_role));

    let role = Router::new()
        .route("/", axum::routing::post(role::create_role).get(role::list_roles))
        .route(
            "/{role_id}",
            get(role::get_role)
                .put(role::update_role)
                .delete(role::delete_role),
        );

    let supplier = Router::new()
        .route(
            "/",
            axum::routing::post(supplier::create_supplier).get(supplier::list_suppliers),
        )
        .route(
            "/{supplier_id}",
            get(supplier::get_supplier)
                .put(supplier::update_supplier)
                .delete(supplier::delete_supplier),
        );

    let egg_type = Router::new()
        .route(
            "/",
            axum::routing::post(egg_type::create_egg_type).get(egg_type::list_egg_types),
        )
        .route(
            "/{typeegg_id}",
            get(egg_type::get_egg_type)
                .put(egg_type::update_egg_type)
                .delete(egg_type::delete_egg_type),
        );

    let egg = Router::new()
        .route("/", axum::routing::post(egg::create_egg).get(egg::list_eggs))
        .route("/stock/{type_egg_id}", get(egg::list_eggs_by_type))
        .route("/search/count_this_month", get(egg::total_egg_count))
        .route(
            "/{egg_id}",
            get(egg::get_egg).put(egg::update_egg).delete(egg::delete_egg),
        );

    let order = Router::new()
        .route("/", axum::routing::post(order::create_order).get(order::list_orders))
        .route("/search/totalOrdersMonth", get(order::list_orders_by_month))
        .route(
            "/{order_id}",
            get(order::get_order)
                .put(order::update_order)
                .delete(order::delete_order),
        );

    let order_item = Router::new()
        .route(
            "/",
            axum::routing::post(order_item::create_order_item).get(order_item::list_order_items),
        )
        .route(
            "/{order_egg_id}",
            get(order_item::get_order_item)
                .put(order_item::update_order_item)
                .delete(order_item::delete_order_item),
        );

    let bill = Router::new()
        .route("/", axum::routing::post(bill::create_bill).get(bill::list_bills))
        .route("/customer/countThisMonth", get(bill::customer_bills_this_month))
        .route("/customer/bestCustomer", get(bill::best_customer))
        .route("/customer/getAllOfCustomers", get(bill::customer_bills))
        .route("/company/getAllOfCompany", get(bill::company_bills))
        .route("/company/monthlySalesTotal", get(bill::monthly_sales_total))
        .route(
            "/{bill_id}",
            get(bill::get_bill).put(bill::update_bill).delete(bill::delete_bill),
        );

    let payment = Router::new()
        .route(
            "/",
            axum::routing::post(payment::create_payment).get(payment::list_payments),
        )
        .route("/earnings/total_earnings", get(payment::total_earnings))
        .route(
            "/earnings/total_earnings_month",
            get(payment::total_earnings_month),
        )
        .route(
            "/{pay_id}",
            get(payment::get_payment)
                .put(payment::update_payment)
                .delete(payment::delete_payment),
        );

    let report = Router::new()
        .route(
            "/",
            axum::routing::post(report::create_report).get(report::list_reports),
        )
        .route("/bills/staff", get(report::staff_bills))
        .route("/bills/clients", get(report::client_bills))
        .route("/bills/clients/month-total", get(report::client_bills_month_total))
        .route("/bills/clients/top-spender", get(report::top_client_spender))
        .route(
            "/{report_id}",
            get(report::get_report)
                .put(report::update_report)
                .delete(report::delete_report),
        );

    let visit = Router::new()
        .route("/", axum::routing::post(visit::register_visit))
        .route("/count", get(visit::visit_count));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/login", axum::routing::post(auth::login))
        .nest("/user", user)
        .nest("/role", role)
        .nest("/supplier", supplier)
        .nest("/typeeggs", egg_type)
        .nest("/egg", egg)
        .nest("/order", order)
        .nest("/orderegg", order_item)
        .nest("/bill", bill)
        .nest("/pay", payment)
        .nest("/report", report)
        .nest("/visit", visit)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

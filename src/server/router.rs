//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`; Swagger
/// UI at `/api/docs`. Returns an Axum `Router<AppState>` ready to be served.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Givebridge", description = "Givebridge API"), tags(
        (name = controller::public::PUBLIC_TAG, description = "Public registration routes"),
        (name = controller::application::APPLICATION_TAG, description = "Application review routes"),
        (name = controller::donor::DONOR_TAG, description = "Donor management routes"),
        (name = controller::student::STUDENT_TAG, description = "Student management routes"),
        (name = controller::inventory::INVENTORY_TAG, description = "Donated inventory routes"),
        (name = controller::area::AREA_TAG, description = "Area management routes"),
        (name = controller::upload::UPLOAD_TAG, description = "Photo upload routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::public::submit_donor_application))
        .routes(routes!(controller::public::submit_student_application))
        .routes(routes!(controller::public::register_student_support))
        .routes(routes!(controller::application::list_donor_applications))
        .routes(routes!(controller::application::get_donor_application))
        .routes(routes!(controller::application::decide_donor_application))
        .routes(routes!(controller::application::list_student_applications))
        .routes(routes!(controller::application::get_student_application))
        .routes(routes!(controller::application::decide_student_application))
        .routes(routes!(controller::donor::list_donors))
        .routes(routes!(controller::donor::find_donor))
        .routes(routes!(controller::donor::get_donor))
        .routes(routes!(controller::donor::create_donor))
        .routes(routes!(controller::donor::update_donor))
        .routes(routes!(controller::donor::set_donor_active))
        .routes(routes!(controller::donor::delete_donor))
        .routes(routes!(controller::student::list_students))
        .routes(routes!(controller::student::get_student))
        .routes(routes!(controller::student::create_student))
        .routes(routes!(controller::student::update_student))
        .routes(routes!(controller::student::mark_student_received))
        .routes(routes!(controller::student::delete_student))
        .routes(routes!(controller::inventory::list_laptops))
        .routes(routes!(controller::inventory::update_laptop))
        .routes(routes!(controller::inventory::assign_laptop))
        .routes(routes!(controller::inventory::deliver_laptop))
        .routes(routes!(controller::inventory::delete_laptop))
        .routes(routes!(controller::inventory::list_motorbikes))
        .routes(routes!(controller::inventory::update_motorbike))
        .routes(routes!(controller::inventory::assign_motorbike))
        .routes(routes!(controller::inventory::deliver_motorbike))
        .routes(routes!(controller::inventory::delete_motorbike))
        .routes(routes!(controller::inventory::list_components))
        .routes(routes!(controller::inventory::update_component))
        .routes(routes!(controller::inventory::assign_component))
        .routes(routes!(controller::inventory::deliver_component))
        .routes(routes!(controller::inventory::delete_component))
        .routes(routes!(controller::inventory::list_tuition))
        .routes(routes!(controller::inventory::update_tuition))
        .routes(routes!(controller::inventory::assign_tuition))
        .routes(routes!(controller::inventory::pay_tuition))
        .routes(routes!(controller::inventory::delete_tuition))
        .routes(routes!(controller::area::list_areas))
        .routes(routes!(controller::area::get_area))
        .routes(routes!(controller::area::create_area))
        .routes(routes!(controller::area::update_area))
        .routes(routes!(controller::area::set_area_active))
        .routes(routes!(controller::area::delete_area))
        .routes(routes!(controller::upload::upload_image))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

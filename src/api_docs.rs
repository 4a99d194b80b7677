use crate::api;
use crate::domain::{Customer, CustomerInput};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::customers::list_customers,
        api::customers::get_customer,
        api::customers::create_customer,
        api::customers::update_customer,
        api::customers::delete_customer,
    ),
    components(schemas(Customer, CustomerInput)),
    tags(
        (name = "customers", description = "Customer CRUD API")
    )
)]
pub struct ApiDoc;

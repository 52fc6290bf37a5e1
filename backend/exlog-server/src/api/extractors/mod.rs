pub mod form_body;
pub mod query_params;

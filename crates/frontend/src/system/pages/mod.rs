pub mod api_key_required;

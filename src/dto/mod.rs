pub mod api_response;
pub mod cache_dto;

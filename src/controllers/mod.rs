pub mod cache_controller;

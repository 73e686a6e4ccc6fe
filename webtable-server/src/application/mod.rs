pub(crate) mod auth_service;
pub(crate) mod item_service;
pub(crate) mod profile_service;

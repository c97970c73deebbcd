mod advertisement;
mod auth;
mod category;

mod advertisement;
mod role;
mod user;

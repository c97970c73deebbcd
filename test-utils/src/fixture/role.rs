//! Role fixtures matching the roles seeded by the migrations.

use entity::role;

/// Id of the role assigned to every registered user.
pub const USER_ROLE_ID: &str = "6f99e991-36ae-43a6-a74f-47aec0f10f6d";

/// Id of the administrator role.
pub const ADMIN_ROLE_ID: &str = "8b8111ff-938f-4a31-a6e9-9f160b43dbf8";

/// Name of the role assigned to every registered user.
pub const USER_ROLE_NAME: &str = "User";

/// Name of the administrator role.
pub const ADMIN_ROLE_NAME: &str = "Admin";

/// Creates the default "User" role model.
pub fn user_role() -> role::Model {
    role::Model {
        id: USER_ROLE_ID.to_string(),
        name: USER_ROLE_NAME.to_string(),
        normalized_name: USER_ROLE_NAME.to_uppercase(),
    }
}

/// Creates the "Admin" role model.
pub fn admin_role() -> role::Model {
    role::Model {
        id: ADMIN_ROLE_ID.to_string(),
        name: ADMIN_ROLE_NAME.to_string(),
        normalized_name: ADMIN_ROLE_NAME.to_uppercase(),
    }
}

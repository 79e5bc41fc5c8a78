//! Stored procedures exposed by the external database.
//!
//! Only the signatures live here. Procedures with a well-defined meaning are
//! implemented in [`crate::schema::geo`] and [`crate::services::metrics_service`].

use std::fmt;

use serde::Serialize;

use self::FunctionCategory::{Authorization, Cart, Metrics, Profile, UserManagement, Utility};
use self::ParamType::{Float, Text, Uuid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionCategory {
    Authorization,
    Metrics,
    Utility,
    Cart,
    Profile,
    UserManagement,
}

impl fmt::Display for FunctionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FunctionCategory::Authorization => "authorization",
            FunctionCategory::Metrics => "metrics",
            FunctionCategory::Utility => "utility",
            FunctionCategory::Cart => "cart",
            FunctionCategory::Profile => "profile",
            FunctionCategory::UserManagement => "user management",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    Text,
    Uuid,
    Float,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnType {
    Boolean,
    Void,
    Text,
    Float,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: &'static str,
    pub ty: ParamType,
}

const fn param(name: &'static str, ty: ParamType) -> Param {
    Param { name, ty }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FunctionSignature {
    pub name: &'static str,
    pub category: FunctionCategory,
    pub params: &'static [Param],
    pub returns: ReturnType,
    pub trigger: bool,
    /// Whether this process can run the procedure itself.
    pub implemented: bool,
}

impl FunctionSignature {
    const fn declared(
        name: &'static str,
        category: FunctionCategory,
        params: &'static [Param],
        returns: ReturnType,
    ) -> Self {
        Self {
            name,
            category,
            params,
            returns,
            trigger: false,
            implemented: false,
        }
    }

    const fn implemented(mut self) -> Self {
        self.implemented = true;
        self
    }

    const fn trigger(mut self) -> Self {
        self.trigger = true;
        self
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (idx, param) in self.params.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {:?}", param.name, param.ty)?;
        }
        write!(f, ") -> {:?}", self.returns)
    }
}

pub static FUNCTIONS: &[FunctionSignature] = &[
    FunctionSignature::declared(
        "has_admin_permission",
        Authorization,
        &[param("permission_type", Text)],
        ReturnType::Boolean,
    ),
    FunctionSignature::declared(
        "has_order_validation_permission",
        Authorization,
        &[],
        ReturnType::Boolean,
    ),
    FunctionSignature::declared("has_delivery_permission", Authorization, &[], ReturnType::Boolean),
    FunctionSignature::declared("is_super_admin", Authorization, &[], ReturnType::Boolean),
    FunctionSignature::declared("is_admin", Authorization, &[], ReturnType::Boolean),
    FunctionSignature::declared(
        "increment_video_views",
        Metrics,
        &[param("video_id", Uuid)],
        ReturnType::Void,
    )
    .implemented(),
    FunctionSignature::declared(
        "increment_video_likes",
        Metrics,
        &[param("video_id", Uuid)],
        ReturnType::Void,
    )
    .implemented(),
    FunctionSignature::declared(
        "increment_recipe_views",
        Metrics,
        &[param("recipe_uuid", Uuid)],
        ReturnType::Void,
    )
    .implemented(),
    FunctionSignature::declared(
        "generate_google_maps_link",
        Utility,
        &[param("lat", Float), param("lng", Float)],
        ReturnType::Text,
    )
    .implemented(),
    FunctionSignature::declared(
        "calculate_distance",
        Utility,
        &[
            param("lat1", Float),
            param("lon1", Float),
            param("lat2", Float),
            param("lon2", Float),
        ],
        ReturnType::Float,
    )
    .implemented(),
    FunctionSignature::declared(
        "find_nearest_delivery_zone",
        Utility,
        &[param("lat", Float), param("lng", Float)],
        ReturnType::Text,
    ),
    FunctionSignature::declared(
        "get_personal_cart_details",
        Cart,
        &[param("cart_id", Uuid)],
        ReturnType::Json,
    ),
    FunctionSignature::declared(
        "get_recipe_cart_details",
        Cart,
        &[param("cart_id", Uuid)],
        ReturnType::Json,
    ),
    FunctionSignature::declared(
        "get_preconfigured_cart_details",
        Cart,
        &[param("cart_id", Uuid)],
        ReturnType::Json,
    ),
    FunctionSignature::declared(
        "update_profile_avatar",
        Profile,
        &[param("user_id", Uuid), param("avatar_url", Text)],
        ReturnType::Void,
    ),
    FunctionSignature::declared(
        "delete_old_avatar",
        Profile,
        &[param("user_id", Uuid)],
        ReturnType::Void,
    ),
    FunctionSignature::declared("handle_new_user", UserManagement, &[], ReturnType::Json).trigger(),
];

pub fn functions() -> &'static [FunctionSignature] {
    FUNCTIONS
}

pub fn find_function(name: &str) -> Option<&'static FunctionSignature> {
    FUNCTIONS.iter().find(|function| function.name == name)
}

pub fn by_category(
    category: FunctionCategory,
) -> impl Iterator<Item = &'static FunctionSignature> {
    FUNCTIONS
        .iter()
        .filter(move |function| function.category == category)
}

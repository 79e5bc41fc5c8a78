//! One record type per table of the external database.

#[allow(unused_imports)]
pub mod prelude {
    pub use super::admin_permission::Entity as AdminPermission;
    pub use super::cart_item::Entity as CartItem;
    pub use super::delivery_tracking::Entity as DeliveryTracking;
    pub use super::delivery_zone::Entity as DeliveryZone;
    pub use super::favorite::Entity as Favorite;
    pub use super::manageable_product_category::Entity as ManageableProductCategory;
    pub use super::manageable_recipe_category::Entity as ManageableRecipeCategory;
    pub use super::newsletter_campaign::Entity as NewsletterCampaign;
    pub use super::order::Entity as Order;
    pub use super::personal_cart::Entity as PersonalCart;
    pub use super::preconfigured_cart::Entity as PreconfiguredCart;
    pub use super::product::Entity as Product;
    pub use super::product_category::Entity as ProductCategory;
    pub use super::profile::Entity as Profile;
    pub use super::recipe::Entity as Recipe;
    pub use super::recipe_cart::Entity as RecipeCart;
    pub use super::recipe_category::Entity as RecipeCategory;
    pub use super::team_member::Entity as TeamMember;
    pub use super::user_cart::Entity as UserCart;
    pub use super::user_history::Entity as UserHistory;
    pub use super::user_location::Entity as UserLocation;
    pub use super::video::Entity as Video;
    pub use super::video_like::Entity as VideoLike;
}

pub mod admin_permission;
pub mod cart_item;
pub mod delivery_tracking;
pub mod delivery_zone;
pub mod favorite;
pub mod manageable_product_category;
pub mod manageable_recipe_category;
pub mod newsletter_campaign;
pub mod order;
pub mod personal_cart;
pub mod preconfigured_cart;
pub mod product;
pub mod product_category;
pub mod profile;
pub mod recipe;
pub mod recipe_cart;
pub mod recipe_category;
pub mod team_member;
pub mod user_cart;
pub mod user_history;
pub mod user_location;
pub mod video;
pub mod video_like;

#[cfg(test)]
mod tests {
    use sea_orm::{EntityName, EntityTrait, Iterable};

    use super::prelude::*;
    use crate::schema::find_table;

    fn assert_matches_registry<E>(entity: E)
    where
        E: EntityTrait,
    {
        let name = entity.table_name();
        let table = find_table(name).unwrap_or_else(|| panic!("{name} missing from registry"));
        let columns: Vec<String> = E::Column::iter()
            .map(|column| sea_orm::IdenStatic::as_str(&column).to_string())
            .collect();
        for column in table.columns {
            assert!(
                columns.iter().any(|c| c == column.name),
                "{name}.{} has no record field",
                column.name
            );
        }
        assert_eq!(columns.len(), table.columns.len(), "{name} column count");
    }

    #[test]
    fn records_match_registry_layout() {
        assert_matches_registry(AdminPermission);
        assert_matches_registry(CartItem);
        assert_matches_registry(DeliveryTracking);
        assert_matches_registry(DeliveryZone);
        assert_matches_registry(Favorite);
        assert_matches_registry(ManageableProductCategory);
        assert_matches_registry(ManageableRecipeCategory);
        assert_matches_registry(NewsletterCampaign);
        assert_matches_registry(Order);
        assert_matches_registry(PersonalCart);
        assert_matches_registry(PreconfiguredCart);
        assert_matches_registry(Product);
        assert_matches_registry(ProductCategory);
        assert_matches_registry(Profile);
        assert_matches_registry(Recipe);
        assert_matches_registry(RecipeCart);
        assert_matches_registry(RecipeCategory);
        assert_matches_registry(TeamMember);
        assert_matches_registry(UserCart);
        assert_matches_registry(UserHistory);
        assert_matches_registry(UserLocation);
        assert_matches_registry(Video);
        assert_matches_registry(VideoLike);
    }
}

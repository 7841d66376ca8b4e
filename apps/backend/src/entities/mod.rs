pub mod baskets;
pub mod comments;
pub mod group_subscribers;
pub mod groups;
pub mod items;
pub mod items_in_basket;
pub mod posts;
pub mod profiles;
pub mod users;

pub use baskets::Entity as Baskets;
pub use baskets::Model as Basket;
pub use comments::Entity as Comments;
pub use comments::Model as Comment;
pub use group_subscribers::Entity as GroupSubscribers;
pub use group_subscribers::Model as GroupSubscriber;
pub use groups::Entity as Groups;
pub use groups::Model as Group;
pub use items::Entity as Items;
pub use items::ItemType;
pub use items::Model as Item;
pub use items_in_basket::Entity as ItemsInBasket;
pub use items_in_basket::Model as ItemInBasket;
pub use posts::Entity as Posts;
pub use posts::Model as Post;
pub use profiles::Entity as Profiles;
pub use profiles::Model as Profile;
pub use users::Entity as Users;
pub use users::Model as User;

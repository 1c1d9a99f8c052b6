pub use super::artworks::Entity as Artworks;
pub use super::contact_requests::Entity as ContactRequests;
pub use super::order_items::Entity as OrderItems;
pub use super::orders::Entity as Orders;
pub use super::testimonials::Entity as Testimonials;

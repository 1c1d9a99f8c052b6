pub mod artworks;
pub mod contact;
pub mod orders;
pub mod payments;
pub mod testimonials;

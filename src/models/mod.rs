pub mod artwork;
pub mod contact;
pub mod order;
pub mod payment;
pub mod testimonial;

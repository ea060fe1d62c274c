pub mod ingredients;
pub mod recipe_details;
pub mod recipes;

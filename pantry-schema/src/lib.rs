pub mod ingredient;
pub mod recipe;

pub use ingredient::{CreateIngredientRequest, IngredientView};
pub use recipe::{CreateRecipeRequest, CreatedRecipe, RecipeIngredientView, RecipeView};

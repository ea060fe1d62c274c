//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema includes:
/// - `recipe` table
/// - `ingredient` table
/// - `recipe_ingredient` join table (many-to-many between the two)
///
/// Join rows reference both parents through foreign keys; the mutators delete
/// join rows before the parent inside one transaction, so the constraints
/// never fire on a well-formed delete.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS recipe (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    created_at TEXT NOT NULL -- RFC3339
);

CREATE TABLE IF NOT EXISTS ingredient (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    created_at TEXT NOT NULL -- RFC3339
);

-- ---------------------------------------------------------------------------
-- Join table: one row per (recipe, ingredient) link
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS recipe_ingredient (
    id INTEGER PRIMARY KEY NOT NULL,
    recipe_id INTEGER NOT NULL REFERENCES recipe(id),
    ingredient_id INTEGER NOT NULL REFERENCES ingredient(id)
);

CREATE INDEX IF NOT EXISTS idx_recipe_ingredient_recipe ON recipe_ingredient(recipe_id);
CREATE INDEX IF NOT EXISTS idx_recipe_ingredient_ingredient ON recipe_ingredient(ingredient_id);
"#;

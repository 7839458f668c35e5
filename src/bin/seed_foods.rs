//! One-shot catalog loader. Safe to run against an empty database after the
//! migrations; running it twice duplicates the catalog, so don't.

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

struct SeedFood {
    name: &'static str,
    category: &'static str,
    calories_per_100g: i32,
    protein: i32,
    carbs: i32,
    fat: i32,
    fiber: i32,
}

const fn food(
    name: &'static str,
    category: &'static str,
    calories_per_100g: i32,
    protein: i32,
    carbs: i32,
    fat: i32,
    fiber: i32,
) -> SeedFood {
    SeedFood {
        name,
        category,
        calories_per_100g,
        protein,
        carbs,
        fat,
        fiber,
    }
}

#[rustfmt::skip]
const FOODS: &[SeedFood] = &[
    // Frutas
    food("Maçã", "Frutas", 52, 0, 14, 0, 2),
    food("Banana", "Frutas", 89, 1, 23, 0, 3),
    food("Laranja", "Frutas", 47, 1, 12, 0, 2),
    food("Morango", "Frutas", 32, 1, 8, 0, 2),
    food("Melancia", "Frutas", 30, 1, 8, 0, 0),
    food("Abacaxi", "Frutas", 50, 0, 13, 0, 1),
    food("Uva", "Frutas", 67, 1, 17, 0, 1),
    food("Pêra", "Frutas", 57, 0, 15, 0, 2),
    // Vegetais
    food("Alface", "Vegetais", 15, 1, 3, 0, 1),
    food("Tomate", "Vegetais", 18, 1, 4, 0, 1),
    food("Cenoura", "Vegetais", 41, 1, 10, 0, 3),
    food("Brócolis", "Vegetais", 34, 3, 7, 0, 2),
    food("Couve-flor", "Vegetais", 25, 2, 5, 0, 2),
    food("Espinafre", "Vegetais", 23, 3, 4, 0, 1),
    food("Abóbora", "Vegetais", 26, 1, 6, 0, 1),
    food("Batata", "Vegetais", 77, 2, 17, 0, 2),
    // Proteínas
    food("Peito de Frango", "Proteínas", 165, 31, 0, 4, 0),
    food("Carne Vermelha", "Proteínas", 250, 26, 0, 17, 0),
    food("Peixe Salmão", "Proteínas", 208, 20, 0, 13, 0),
    food("Ovo", "Proteínas", 155, 13, 1, 11, 0),
    food("Iogurte Grego", "Proteínas", 59, 10, 3, 0, 0),
    food("Queijo", "Proteínas", 402, 25, 1, 33, 0),
    food("Leite Integral", "Proteínas", 61, 3, 5, 3, 0),
    food("Feijão", "Proteínas", 127, 9, 23, 0, 6),
    // Carboidratos
    food("Arroz Branco", "Carboidratos", 130, 3, 28, 0, 0),
    food("Arroz Integral", "Carboidratos", 111, 3, 23, 1, 4),
    food("Pão Branco", "Carboidratos", 265, 9, 49, 3, 2),
    food("Pão Integral", "Carboidratos", 247, 9, 41, 3, 7),
    food("Macarrão", "Carboidratos", 131, 5, 25, 1, 2),
    food("Batata-doce", "Carboidratos", 86, 2, 20, 0, 3),
    food("Aveia", "Carboidratos", 389, 17, 66, 7, 11),
    food("Mel", "Carboidratos", 304, 0, 82, 0, 0),
    // Gorduras e Óleos
    food("Azeite de Oliva", "Gorduras", 884, 0, 0, 100, 0),
    food("Amendoim", "Gorduras", 567, 26, 20, 49, 6),
    food("Castanha de Caju", "Gorduras", 553, 18, 30, 44, 3),
    food("Abacate", "Gorduras", 160, 2, 9, 15, 7),
    food("Nozes", "Gorduras", 654, 9, 14, 65, 7),
    food("Manteiga", "Gorduras", 717, 1, 0, 81, 0),
    // Bebidas
    food("Suco de Laranja", "Bebidas", 45, 1, 11, 0, 0),
    food("Café", "Bebidas", 0, 0, 0, 0, 0),
    food("Chá Verde", "Bebidas", 0, 0, 0, 0, 0),
    food("Refrigerante", "Bebidas", 42, 0, 11, 0, 0),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "seed_foods=info,sqlx=warn".to_string());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is required")?;
    let db = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("connect to database")?;

    info!("seeding {} foods", FOODS.len());
    for f in FOODS {
        sqlx::query(
            r#"
            INSERT INTO foods (name, category, calories_per_100g, protein, carbs, fat, fiber)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(f.name)
        .bind(f.category)
        .bind(f.calories_per_100g)
        .bind(f.protein)
        .bind(f.carbs)
        .bind(f.fat)
        .bind(f.fiber)
        .execute(&db)
        .await
        .with_context(|| format!("insert food {}", f.name))?;
    }

    info!("{} foods seeded", FOODS.len());
    Ok(())
}

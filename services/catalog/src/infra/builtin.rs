//! The four recipes that ship with the catalog. Read-only.

use std::sync::LazyLock;

use recipebook_domain::id::RecipeId;
use recipebook_domain::recipe::{Difficulty, Nutrition, Recipe};

struct Seed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    image: &'static str,
    prep: u32,
    cook: u32,
    servings: u32,
    difficulty: Difficulty,
    ingredients: &'static [&'static str],
    instructions: &'static [&'static str],
    notes: &'static str,
    nutrition: (u32, &'static str, &'static str, &'static str),
}

impl Seed {
    fn to_recipe(&self) -> Recipe {
        let (calories, protein, carbs, fat) = self.nutrition;
        Recipe {
            id: RecipeId::from(self.id),
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            category: self.category.to_owned(),
            prep_time_minutes: self.prep,
            cook_time_minutes: self.cook,
            servings: self.servings,
            ingredients: owned(self.ingredients),
            instructions: owned(self.instructions),
            notes: self.notes.to_owned(),
            image_ref: self.image.to_owned(),
            difficulty: self.difficulty,
            nutrition: Nutrition {
                calories,
                protein: protein.to_owned(),
                carbs: carbs.to_owned(),
                fat: fat.to_owned(),
            },
            date_added: None,
            author_id: None,
        }
    }
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| (*l).to_owned()).collect()
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "spaghetti-carbonara",
        title: "Spaghetti Carbonara",
        description: "Classic Italian pasta dish with eggs, cheese, and pancetta",
        category: "main-course",
        image: "https://images.unsplash.com/photo-1621996346565-e3dbc353d2e5?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        prep: 10,
        cook: 15,
        servings: 4,
        difficulty: Difficulty::Medium,
        ingredients: &[
            "400g spaghetti pasta",
            "200g pancetta or guanciale, diced",
            "4 large egg yolks",
            "100g Pecorino Romano cheese, grated",
            "2 cloves garlic, minced",
            "Salt and black pepper to taste",
            "2 tablespoons olive oil",
        ],
        instructions: &[
            "Bring a large pot of salted water to boil. Add spaghetti and cook according to package directions until al dente.",
            "While pasta cooks, heat olive oil in a large skillet over medium heat. Add pancetta and cook until crispy, about 5-7 minutes.",
            "Add minced garlic to the pancetta and cook for another minute until fragrant.",
            "In a bowl, whisk together egg yolks and grated Pecorino Romano cheese until well combined.",
            "Reserve 1 cup of pasta cooking water, then drain the spaghetti.",
            "Add the hot pasta to the skillet with pancetta. Remove from heat immediately.",
            "Quickly add the egg and cheese mixture, tossing rapidly to coat the pasta. Add pasta water gradually until you achieve a creamy consistency.",
            "Season with black pepper and serve immediately while hot. Garnish with extra cheese if desired.",
        ],
        notes: "The key to perfect carbonara is timing and temperature. Make sure to remove the pan from heat before adding the egg mixture to prevent scrambling. The residual heat from the pasta and pan will cook the eggs gently. Traditional carbonara doesn't include cream - the creaminess comes from the eggs and cheese combined with the starchy pasta water.",
        nutrition: (520, "22g", "68g", "18g"),
    },
    Seed {
        id: "chicken-tikka",
        title: "Chicken Tikka Masala",
        description: "Creamy and flavorful Indian curry with tender chicken",
        category: "main-course",
        image: "https://images.unsplash.com/photo-1599487488170-d11ec9c172f0?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        prep: 30,
        cook: 45,
        servings: 6,
        difficulty: Difficulty::Medium,
        ingredients: &[
            "2 lbs chicken breast, cut into chunks",
            "1 cup plain yogurt",
            "2 tbsp lemon juice",
            "2 tsp garam masala",
            "1 tsp cumin powder",
            "1 tsp coriander powder",
            "1 onion, diced",
            "3 cloves garlic, minced",
            "1 inch ginger, grated",
            "1 can crushed tomatoes",
            "1 cup heavy cream",
            "Fresh cilantro for garnish",
        ],
        instructions: &[
            "Marinate chicken chunks in yogurt, lemon juice, and half the spices for at least 30 minutes.",
            "Heat oil in a large pan and cook marinated chicken until golden. Set aside.",
            "In the same pan, sauté onions until translucent, add garlic and ginger.",
            "Add remaining spices and cook for 1 minute until fragrant.",
            "Add crushed tomatoes and simmer for 10 minutes.",
            "Stir in heavy cream and return chicken to the pan.",
            "Simmer for 15-20 minutes until sauce thickens.",
            "Garnish with fresh cilantro and serve with rice or naan.",
        ],
        notes: "For extra flavor, you can grill the marinated chicken instead of pan-frying. Adjust the amount of cream based on your preferred consistency.",
        nutrition: (380, "32g", "12g", "24g"),
    },
    Seed {
        id: "chocolate-cake",
        title: "Decadent Chocolate Cake",
        description: "Rich, moist chocolate cake perfect for special occasions",
        category: "dessert",
        image: "https://images.unsplash.com/photo-1578985545062-69928b1d9587?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        prep: 20,
        cook: 60,
        servings: 8,
        difficulty: Difficulty::Easy,
        ingredients: &[
            "2 cups all-purpose flour",
            "2 cups sugar",
            "3/4 cup cocoa powder",
            "2 tsp baking soda",
            "1 tsp baking powder",
            "1 tsp salt",
            "2 eggs",
            "1 cup buttermilk",
            "1 cup strong black coffee, cooled",
            "1/2 cup vegetable oil",
            "1 tsp vanilla extract",
        ],
        instructions: &[
            "Preheat oven to 350°F. Grease and flour two 9-inch round cake pans.",
            "In a large bowl, whisk together flour, sugar, cocoa, baking soda, baking powder, and salt.",
            "In another bowl, beat eggs, then add buttermilk, coffee, oil, and vanilla.",
            "Pour wet ingredients into dry ingredients and mix until just combined.",
            "Divide batter between prepared pans.",
            "Bake for 30-35 minutes until a toothpick comes out clean.",
            "Cool in pans for 10 minutes, then turn out onto wire racks.",
            "Cool completely before frosting.",
        ],
        notes: "The coffee enhances the chocolate flavor without making the cake taste like coffee. You can substitute with hot water if preferred.",
        nutrition: (420, "6g", "78g", "12g"),
    },
    Seed {
        id: "caesar-salad",
        title: "Classic Caesar Salad",
        description: "Fresh romaine lettuce with homemade Caesar dressing",
        category: "salad",
        image: "https://images.unsplash.com/photo-1551248429-40975aa4de74?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        prep: 15,
        cook: 0,
        servings: 4,
        difficulty: Difficulty::Easy,
        ingredients: &[
            "2 large romaine lettuce heads",
            "1/2 cup grated Parmesan cheese",
            "1 cup croutons",
            "2 cloves garlic, minced",
            "2 anchovy fillets (optional)",
            "1 egg yolk",
            "1 tbsp lemon juice",
            "1 tsp Worcestershire sauce",
            "1/2 cup olive oil",
            "Salt and pepper to taste",
        ],
        instructions: &[
            "Wash and dry romaine lettuce thoroughly. Chop into bite-sized pieces.",
            "In a small bowl, mash garlic and anchovies into a paste.",
            "Whisk in egg yolk, lemon juice, and Worcestershire sauce.",
            "Slowly drizzle in olive oil while whisking to create an emulsion.",
            "Season dressing with salt and pepper.",
            "Toss lettuce with dressing in a large bowl.",
            "Add Parmesan cheese and croutons.",
            "Serve immediately.",
        ],
        notes: "For food safety, you can use pasteurized eggs or substitute with mayonnaise. The anchovy paste adds authentic umami flavor but can be omitted for vegetarians.",
        nutrition: (280, "8g", "12g", "24g"),
    },
];

static BUILTIN: LazyLock<Vec<Recipe>> = LazyLock::new(|| SEEDS.iter().map(Seed::to_recipe).collect());

/// Built-in recipes in their fixed display order.
pub fn builtin_recipes() -> &'static [Recipe] {
    &BUILTIN
}

pub fn find_builtin(id: &RecipeId) -> Option<&'static Recipe> {
    BUILTIN.iter().find(|r| &r.id == id)
}

mod admin_test;
mod favorite_test;
mod helpers;
mod recipe_test;
mod router_test;
mod storage_test;
mod user_test;

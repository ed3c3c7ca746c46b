mod exercise_create_day_id_idx;
mod exercise_create_table;
mod plan_create_table;
mod plan_create_user_id_idx;
mod plan_day_create_order_idx;
mod plan_day_create_table;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "liftbook",
    "m0_2",
    vec_box![crate::m0_1::Migration],
    vec_box![
        plan_create_table::Operation,
        plan_create_user_id_idx::Operation,
        plan_day_create_table::Operation,
        plan_day_create_order_idx::Operation,
        exercise_create_table::Operation,
        exercise_create_day_id_idx::Operation,
    ]
);

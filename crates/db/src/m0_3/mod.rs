mod log_create_table;
mod week_create_plan_id_idx;
mod week_create_table;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "liftbook",
    "m0_3",
    vec_box![crate::m0_2::Migration],
    vec_box![
        week_create_table::Operation,
        week_create_plan_id_idx::Operation,
        log_create_table::Operation,
    ]
);

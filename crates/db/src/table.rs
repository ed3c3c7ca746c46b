use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Email,
    PasswordHash,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Plan {
    Table,
    Id,
    UserId,
    Name,
    DaysPerWeek,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum PlanDay {
    Table,
    Id,
    PlanId,
    DayOrder,
    Headline,
}

#[derive(Iden, Clone)]
pub enum Exercise {
    Table,
    Id,
    DayId,
    Name,
    Sets,
    Reps,
    Position,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Week {
    Table,
    Id,
    PlanId,
    StartDate,
    IsLocked,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Log {
    Table,
    WeekId,
    ExerciseId,
    DayNumber,
    WeightLifted,
    Sets,
    Reps,
    Notes,
    Difficulty,
    UpdatedAt,
}

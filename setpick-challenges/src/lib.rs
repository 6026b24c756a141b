pub mod problem_set;

mod helpers;
mod login;
mod logout;
mod muscle_groups;
mod refresh;
mod signup;
mod suggest;
mod users;
mod verify_token;
mod workout_sessions;

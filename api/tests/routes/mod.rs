mod chat_rooms_test;
mod health_test;
mod join_requests_test;
mod matches_test;
mod profiles_test;

use crate::models::{Activity, ActivityMap};

const DOMAIN: &str = "mergington.edu";

/// The activities offered when the server starts without a seed file.
pub fn default_activities() -> ActivityMap {
    [
        (
            "Soccer Team",
            "Join the varsity soccer team and compete against other schools",
            "Mondays, Wednesdays, Fridays, 4:00 PM - 6:00 PM",
            25,
            ["lucas", "ava"],
        ),
        (
            "Swimming Club",
            "Swim training and competitions for all skill levels",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            20,
            ["noah", "isabella"],
        ),
        (
            "Drama Club",
            "Perform in school plays and develop acting skills",
            "Wednesdays, 3:30 PM - 5:30 PM",
            30,
            ["mia", "ethan"],
        ),
        (
            "Art Studio",
            "Explore painting, drawing, and sculpture techniques",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            ["james", "charlotte"],
        ),
        (
            "Debate Team",
            "Develop critical thinking and public speaking through competitive debates",
            "Mondays, 3:30 PM - 5:00 PM",
            16,
            ["william", "amelia"],
        ),
        (
            "Science Olympiad",
            "Compete in science competitions and conduct experiments",
            "Wednesdays, 3:30 PM - 5:00 PM",
            20,
            ["benjamin", "harper"],
        ),
        (
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            ["michael", "daniel"],
        ),
        (
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            ["emma", "sophia"],
        ),
        (
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            ["john", "olivia"],
        ),
    ]
    .into_iter()
    .map(|(name, description, schedule, max, students)| {
        let activity = Activity::new(description, schedule, max)
            .with_participants(students.map(|s| format!("{s}@{DOMAIN}")));
        (name.to_string(), activity)
    })
    .collect()
}

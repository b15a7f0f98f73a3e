use crate::models::Weekday;

type Slots = &'static [(&'static str, &'static str)];

/// Default weekly plan: (time slot, focus area) per day.
pub const DEFAULT_TIMETABLE: &[(Weekday, Slots)] = &[
    (
        Weekday::Monday,
        &[
            ("8:30 am – 5:30 pm", "University (long day)"),
            ("8:30 – 9:15 pm", "Light review (DBMS or Linear)"),
        ],
    ),
    (
        Weekday::Tuesday,
        &[
            ("8:30 – 10:20 am", "University"),
            ("11:30 – 12:15 pm", "Linear Algebra practice"),
            ("12:30 – 1:15 pm", "DBMS concepts/queries"),
            ("2:45 – 5:30 pm", "University"),
            ("8:30 – 9:15 pm", "DSA coding (1 problem)"),
        ],
    ),
    (
        Weekday::Wednesday,
        &[
            ("8:30 – 9:30 am", "University"),
            ("10:30 – 11:15 am", "DSA problem solving"),
            ("11:30 – 12:15 pm", "DSA problem solving"),
            ("12:30 – 1:15 pm", "Linear Algebra problem set"),
            ("2:45 – 5:30 pm", "University"),
            ("8:30 – 9:00 pm", "DBMS flashcards/summary"),
        ],
    ),
    (
        Weekday::Thursday,
        &[
            ("10:20 am – 5:30 pm", "University"),
            ("8:00 – 8:45 pm", "Light DSA (easy problem) OR Linear recap"),
        ],
    ),
    (
        Weekday::Friday,
        &[
            ("12:00 – 1:30 pm", "DSA coding (focus session)"),
            ("4:00 – 5:00 pm", "DBMS deep dive (queries, ER diagrams)"),
        ],
    ),
    (
        Weekday::Saturday,
        &[
            ("11:00 – 12:30 pm", "DSA focus session"),
            ("3:00 – 6:00 pm", "MERN Stack Course"),
            ("6:30 – 7:00 pm", "SE Principles / Business Writing"),
        ],
    ),
    (
        Weekday::Sunday,
        &[
            ("11:00 – 12:30 pm", "Linear Algebra problem-solving"),
            ("3:00 – 6:00 pm", "MERN Stack Course"),
            ("6:30 – 7:00 pm", "Technical Business Writing"),
        ],
    ),
];

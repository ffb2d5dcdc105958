use serde_json::{json, Value};

/// Static portfolio payload served by the `GetMyInfo` tool. The shape
/// mirrors what the portfolio site renders; the agent never inspects it,
/// it is handed verbatim to the model as an observation.
pub fn payload() -> Value {
    json!({
        "user_details": {
            "name": "Amit Chaudhary",
            "designation": "Sr. Mobile Application Developer",
            "description": "A passionate Mobile App Developer with over 5 years of experience in creating engaging, high-performance cross-platform mobile applications. Adept in languages including Java, Kotlin, Dart, JavaScript and Python.",
            "picture": {
                "src": "amit.jpeg",
                "link": "https://www.linkedin.com/in/itheamc"
            },
            "startDate": "01 Apr 2019",
            "links": [
                {
                    "icon": "fa fa-envelope-open",
                    "tooltip": "Send Mail",
                    "label": "itheamc@gmail.com",
                    "link": "mailto:itheamc@gmail.com?subject=Job%20offer"
                },
                {
                    "icon": "fa fa-map-marker-alt",
                    "tooltip": "View in maps",
                    "label": "Dang, Nepal",
                    "link": "https://maps.app.goo.gl/GcQPye3irj7LveNQ7"
                }
            ],
            "sns": [
                { "icon": "fab fa-github", "tooltip": "Github", "link": "https://github.com/itheamc" },
                { "icon": "fab fa-stack-overflow", "tooltip": "Stack Overflow", "link": "https://stackoverflow.com/users/16758002/itheamc" },
                { "icon": "fab fa-linkedin", "tooltip": "LinkedIn", "link": "https://www.linkedin.com/in/itheamc/" }
            ]
        },
        "skills": [
            {
                "title": "Android",
                "scale": 5,
                "tech": ["Java", "Kotlin", "Jetpack Compose", "Room", "Gradle"],
                "lib": ["RxJava", "LiveData", "Retrofit", "Firebase"]
            },
            {
                "title": "Flutter",
                "scale": 5,
                "tech": ["Dart", "pub", "Riverpod", "Provider"],
                "lib": ["BLoC", "GetX", "Firebase", "FCM"]
            },
            {
                "title": "iOS",
                "scale": 3,
                "tech": ["Swift", "Cocoapod"],
                "lib": ["SQLite.swift", "Firebase"]
            },
            {
                "title": "Web",
                "scale": 3,
                "tech": ["HTML", "CSS", "JavaScript", "TypeScript"],
                "lib": ["jQuery", "Bootstrap"]
            },
            {
                "title": "Python",
                "scale": 3,
                "tech": ["Python", "Django", "pip"],
                "lib": ["flet", "chaquopy", "OpenCV", "geodjango"]
            }
        ],
        "languages": [
            { "name": "Nepali", "scale": 5, "proficiency": "Native or Bilingual Proficiency" },
            { "name": "Hindi", "scale": 4, "proficiency": "Near-Native Proficiency" },
            { "name": "English", "scale": 3, "proficiency": "Professional Working Proficiency" }
        ],
        "interests": [
            { "title": "Reading" },
            { "title": "Researching" },
            { "title": "Coding" },
            { "title": "Travelling" }
        ],
        "experiences": [
            {
                "position": "Sr. Mobile Application Developer",
                "company": "NAXA Pvt. Ltd, Kathmandu",
                "duration": "July 2022 - Present",
                "tech": ["Android (Native)", "Flutter", "iOS (Swift)"],
                "achievements": [
                    "Lead the development and maintenance of mobile applications for iOS and Android platforms.",
                    "Collaborate with cross-functional teams to define and implement new features.",
                    "Optimize app performance and troubleshoot issues."
                ]
            },
            {
                "position": "Flutter Developer",
                "company": "Casper India, Bangalore",
                "duration": "Jan 2022 - May 2022",
                "tech": ["Flutter", "Python", "React.JS", "Django"],
                "achievements": [
                    "Developed robust, location-specific ecommerce apps utilizing Flutter.",
                    "Used Django framework to build a backend billing application."
                ]
            }
        ],
        "education": [
            {
                "board": "Pokhara University",
                "school": "Victoria College/Dang, Nepal",
                "concentration": "Bachelor of Business Administration",
                "score": 3.6,
                "metric": "CGPA",
                "duration": "July 2011 - Sept 2015"
            },
            {
                "board": "Higher Secondary Education Board (HSEB)",
                "school": "Janta Higher Secondary School/Gadhawa, Nepal",
                "concentration": "10+2 (Commerce)",
                "score": 53,
                "metric": "%",
                "duration": "Apr 2009 - Mar 2011"
            }
        ],
        "personal_projects": [
            {
                "name": "naxalibre",
                "description": "Feature-rich MapLibre plugin for Flutter.",
                "duration": "Feb 2025",
                "tech": ["Flutter", "Dart", "Pigeon", "Kotlin", "Swift", "MapLibre"],
                "refs": [
                    { "tooltip": "Check it out", "url": "https://pub.dev/packages/naxalibre/" }
                ]
            }
        ]
    })
}

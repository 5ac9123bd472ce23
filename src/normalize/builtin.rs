//! Bundled Maharashtra engineering-admission tables.
//!
//! Plain data. Adding a synonym, town or category code is a one-line change
//! here and needs no logic change anywhere else.

/// Raw course name as published → canonical branch name.
pub const BRANCH_SYNONYMS: &[(&str, &str)] = &[
    ("Artificial Intelligence and Data Science", "Artificial Intelligence and Data Science"),
    ("Artificial Intelligence (AI) and Data Science", "Artificial Intelligence and Data Science"),
    ("Artificial Intelligence (Al) and Data Science", "Artificial Intelligence and Data Science"),
    ("Computer Science and Engineering (Artificial Intelligence and Data Science)", "Artificial Intelligence and Data Science"),
    ("Computer Science and Engineering(Artificial Intelligence and Data Science)", "Artificial Intelligence and Data Science"),
    ("Artificial Intelligence and Machine Learning", "Artificial Intelligence and Machine Learning"),
    ("Computer Science and Engineering(Artificial Intelligence and Machine Learning)", "Artificial Intelligence and Machine Learning"),
    ("Computer Science and Engineering (Artificial Intelligence)", "Artificial Intelligence"),
    ("Artificial Intelligence", "Artificial Intelligence"),
    ("Computer Science and Engineering(Cyber Security)", "Cyber Security"),
    ("Computer Science and Engineering (Cyber Security)", "Cyber Security"),
    ("Cyber Security", "Cyber Security"),
    ("Data Science", "Data Science"),
    ("Computer Science and Engineering(Data Science)", "Data Science"),
    ("Commuter Science and Engineering(Data Science)", "Data Science"),
    ("Internet of Things (IoT)", "Internet of Things"),
    ("Computer Science and Engineering (IoT)", "Internet of Things"),
    ("Industrial IoT", "Internet of Things"),
    (
        "Computer Science and Engineering (Internet of Things and Cyber Security Including Block Chain Technology)",
        "Internet of Things and Cyber Security Including Block Chain Technology",
    ),
    ("Computer Science", "Computer Science and Engineering"),
    ("Computer Science and Engineering", "Computer Science and Engineering"),
    ("Computer Engineering", "Computer Science and Engineering"),
    ("Computer Engineering[Direct Second Year Second Shift]", "Computer Science and Engineering"),
    ("Computer Technology", "Computer Science and Engineering"),
    ("Computer Science and Technology", "Computer Science and Engineering"),
    ("Information Technology", "Information Technology"),
    ("Electronics and Telecommunication Engineering", "Electronics and Telecommunication Engineering"),
    ("Electronics and Telecommunication Engg", "Electronics and Telecommunication Engineering"),
    ("Electronics and Telecommunication Engineering[Direct Second Year Second Shift]", "Electronics and Telecommunication Engineering"),
    ("Electronics and Telecommunication Engg[Direct Second Year Second Shift]", "Electronics and Telecommunication Engineering"),
    ("Electronics Engineering", "Electronics Engineering"),
    ("Electronics Engineering (VLSI Design and Technology)", "VLSI"),
    ("Electronics Engineering ( VLSI Design and Technology)", "VLSI"),
    ("Electrical Engineering", "Electrical Engineering"),
    ("Electrical and Electronics Engineering", "Electrical and Electronics Engineering"),
    ("Electrical Engg [Electrical and Power]", "Electrical Engineering"),
    ("Electrical Engg[Electronics and Power]", "Electrical Engineering"),
    ("Electrical Engg Electronics and Power]", "Electrical Engineering"),
    ("Mechanical Engineering", "Mechanical Engineering"),
    ("Mechanical Engineering[Sandwich]", "Mechanical Engineering"),
    ("Mechanical & Automation Engineering", "Mechanical Engineering"),
    ("Mechanical and Mechatronics Engineering (Additive Manufacturing)", "Mechanical Engineering"),
    ("Mechatronics Engineering", "Mechatronics Engineering"),
    ("Civil Engineering", "Civil Engineering"),
    ("Civil Engineering and Planning", "Civil Engineering"),
    ("Civil and Environmental Engineering", "Civil Engineering"),
    ("Civil and infrastructure Engineering", "Civil Engineering"),
    ("Instrumentation Engineering", "Instrumentation Engineering"),
    ("Instrumentation and Control Engineering", "Instrumentation Engineering"),
    ("Printing Technology", "Printing Technology"),
    ("Production Engineering", "Production Engineering"),
    ("Production Engineering[Sandwich]", "Production Engineering"),
    ("Robotics and Automation", "Robotics and Automation"),
    ("Automation and Robotics", "Robotics and Automation"),
    ("Robotics and Artificial Intelligence", "Robotics and Artificial Intelligence"),
    ("Bio Medical Engineering", "Biomedical Engineering"),
    ("Electronics and Communication(Advanced Communication Technology)", "Electronics and Communication Engineering"),
    ("Electronics and Communication (Advanced Communication Technology)", "Electronics and Communication Engineering"),
];

/// District cluster key → towns treated as the same location.
///
/// The key itself is always part of its cluster.
pub const DISTRICT_CLUSTERS: &[(&str, &[&str])] = &[
    ("Mumbai", &["Mumbai", "Thane", "Navi Mumbai", "Panvel", "Kalyan", "Dombivli", "Vasai", "Virar", "Andheri", "Boisar", "Ulhasnagar", "Badlapur"]),
    ("Pune", &["Pune", "PCMC", "Hadapsar", "Wagholi", "Shivaji Nagar", "Kothrud", "Baramati", "Lonavala", "Narhe", "Pisoli", "Ravet", "Sasewadi", "Warje", "Bhor", "Indapur"]),
    ("Nagpur", &["Nagpur", "Wardha", "Bhandara", "Ramtek", "Sevagram", "Sindhi", "Badravati", "Bamni"]),
    ("Nashik", &["Nashik", "Malegaon", "Satana", "Kopargaon", "Sinnar", "Niphad", "Egatpuri", "Ohar"]),
    ("Aurangabad", &["Aurangabad", "Jalna", "Paithan", "Sambhajinagar", "Beed", "Ambejogai", "Dharashiv", "Tuljapur"]),
    ("Kolhapur", &["Kolhapur", "Ichalkaranji", "Karvir", "Gadhinglaj", "Jaysingpur", "Miraj", "Sangli", "Yadrav", "Warananagar", "Panhala"]),
    ("Ahmednagar", &["Ahmednagar", "Nagar", "Sangamner", "Nepti"]),
    ("Amravati", &["Amravati", "Badnera", "Chandrapur"]),
    ("Buldhana", &["Buldhana", "Chikhali", "Shegaon"]),
    ("Dhule", &["Dhule", "Shirpur"]),
    ("Jalgaon", &["Jalgaon", "Faizpur"]),
    ("Latur", &["Latur", "Tuljapur", "Dharashiv"]),
    ("Ratnagiri", &["Ratnagiri", "Deorukh", "Kankavli"]),
    ("Sangli", &["Sangli", "Sangola", "Miraj", "Jaysingpur"]),
    ("Satara", &["Satara", "Phaltan", "Panhala", "Paniv"]),
    ("Solapur", &["Solapur", "Barshi", "Pandharpur", "Akluj"]),
    ("Wardha", &["Wardha", "Sevagram"]),
];

/// Main category label → raw category codes, in dropdown order.
///
/// A code may belong to several groups (`PWD-O` is both OPEN and PWD).
pub const MAIN_CATEGORIES: &[(&str, &[&str])] = &[
    ("OPEN / GENERAL", &["GOPEN", "LOPEN", "PWD-O", "GORD"]),
    ("OBC", &["GOBC", "LOBC", "PWDR-OBC", "DEFR-OBC", "DEFA-OBC"]),
    ("SC", &["GSC", "LSC", "PWDR-SC", "DEFR-SC"]),
    ("ST", &["GST", "LST", "DEFR-ST"]),
    ("SEBC", &["GSEBC", "LSEBC", "PWDA-SEBC", "PWDR-SEBC", "DEFR-SEBC"]),
    ("NT(A)", &["GNTA", "LNTA", "DEFR-NTA"]),
    ("NT(B)", &["GNTB", "LNTB", "DEFR-NTB"]),
    ("NT(C)", &["GNTC", "LNTC"]),
    ("NT(D)", &["GNTD", "LNTD"]),
    ("EWS", &["EWS"]),
    ("Minority", &["MI"]),
    ("PWD (Disability)", &["PWD-O", "PWDA-SEBC", "PWDR-OBC", "PWDR-SC", "PWDR-SEBC", "PWD-NTA"]),
    ("DEFENCE", &["DEFR-OBC", "DEFR-SC", "DEFR-ST", "DEFR-SEBC", "DEFR-NTA", "DEFR-NTB", "DEFR-NTC", "DEFR-NTD", "DEFA-OBC"]),
];

/// Branches offered in the branch picker even when the loaded catalog has
/// no listing for them.
pub const OFFERED_BRANCHES: &[&str] = &[
    "5G",
    "Aeronautical Engineering",
    "Agricultural Engineering",
    "Architecture",
    "Artificial Intelligence",
    "Automobile Engineering",
    "Bioinformatics",
    "Biomedical Engineering",
    "Chemical Engineering",
    "Civil Engineering",
    "Computer Science and Engineering",
    "Data Science",
    "Electrical Engineering",
    "Electronics and Communication Engineering",
    "Information Technology",
    "Instrumentation Engineering",
    "Mechanical Engineering",
    "Mechatronics",
    "Mining Engineering",
    "Petroleum Engineering",
    "Production Engineering",
    "Software Engineering",
    "Structural Engineering",
    "VLSI",
];

/// Category every query falls back to when no category is chosen.
pub const DEFAULT_CATEGORY: &str = "GOPEN";

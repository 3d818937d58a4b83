use super::{t, Language, Text};

pub const OWNER: &str = "Katarzyna Stańczyk";
pub const WORKSPACE_PATH: &str = "~/KatarzynaStanczyk_portfolio";
pub const GITHUB_URL: &str = "https://github.com/Avuii";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/katarzyna-stanczyk";
pub const CONTACT_EMAIL: &str = "kstanczyk.contactme@gmail.com";
pub const CV_URL: &str = "https://www.dropbox.com/scl/fi/xypoysouei31poeplrkl4/CV_KatarzynaStanczyk.pdf?rlkey=utzl4z2ff52wt2s2t1kfexq7q&st=2mnimrvw&dl=1";

// Hero

pub const HERO_GREETING: Text = t("Hello, I'm", "Cześć, jestem");
pub const HERO_ROLE: Text = t(
    "Computer Science Student · .NET Developer Intern · Full-Stack Development · Algorithms · ML / AI",
    "Studentka Informatyki · Stażystka .NET · Full-Stack Development · Algorytmy · ML / AI",
);
pub const HERO_LOADED_MODULES: Text = t("LOADED_MODULES:", "ZAŁADOWANE MODUŁY:");
pub const HERO_EXPORT_FILE: Text = t("Export CV.pdf", "Eksportuj CV.pdf");
pub const HERO_GENERATING: Text = t("> generating file", "> przygotowywanie pliku");
pub const HERO_MODULES: [&str; 9] = [
    "C#", ".NET", "C++", "Blazor", "Angular", "Python", "SQL", "ML", "AI",
];

const HERO_CODE_EN: [&str; 12] = [
    "// Welcome to my workspace",
    "import { Developer } from './universe';",
    "",
    "const Portfolio = () => {",
    "  return (",
    "    <Developer",
    "      name=\"Katarzyna Stańczyk\"",
    "      role=\"Full-Stack Developer\"",
    "      passion=\"Building practical software\"",
    "    />",
    "  );",
    "};",
];

const HERO_CODE_PL: [&str; 12] = [
    "// Witaj w moim środowisku pracy",
    "import { Developer } from './universe';",
    "",
    "const Portfolio = () => {",
    "  return (",
    "    <Developer",
    "      name=\"Katarzyna Stańczyk\"",
    "      role=\"Full-Stack Developer\"",
    "      passion=\"Buduję praktyczne oprogramowanie\"",
    "    />",
    "  );",
    "};",
];

/// Return the multi-line source typed out in the hero code window.
///
pub fn hero_code(language: Language) -> String {
    match language {
        Language::En => HERO_CODE_EN.join("\n"),
        Language::Pl => HERO_CODE_PL.join("\n"),
    }
}

/// Number of rows the hero code window occupies regardless of locale.
pub const HERO_CODE_ROWS: usize = HERO_CODE_EN.len();

// About

pub const ABOUT_TITLE: Text = t("# About.system", "# O_mnie.system");
pub const ABOUT_WHOAMI: Text = t(
    "Computer Science student at the University of Łódź and aspiring Full-Stack Developer focused on building practical software. I enjoy combining clean backend architecture, user-friendly interfaces, and problem-solving grounded in real-world needs.",
    "Jestem studentką Informatyki i rozwijam się jako Full-Stack Developer. Tworzę praktyczne oprogramowanie: od czystej architektury backendu po dopracowane interfejsy i rozwiązywanie realnych problemów.",
);
pub const ABOUT_MISSION: Text = t(
    "I turn ideas, requirements, and data into maintainable software. Right now I'm growing through .NET internship work, academic projects in algorithms and machine learning, and hands-on full-stack development.",
    "Zamieniam pomysły, wymagania i dane w utrzymywalne oprogramowanie. Rozwijam się poprzez staż w .NET oraz projekty z algorytmów i machine learningu, od prototypu do wdrożenia.",
);
pub const ABOUT_LOCATION: &str = "Łódź, Poland";
pub const ABOUT_STATUS: Text = t("STATUS: AVAILABLE", "STATUS: DOSTĘPNA");

pub const PORTRAIT: [&str; 6] = [
    "  .-\"\"\"-.  ",
    " /  _ _  \\ ",
    " | (o)(o) |",
    " |   __   |",
    "  \\ \\__/ / ",
    "   '----'  ",
];

pub struct Stat {
    pub label: Text,
    pub value: Text,
}

pub const ABOUT_STATS: [Stat; 4] = [
    Stat {
        label: t("STUDIES", "STUDIA"),
        value: t("3rd yr", "3 rok"),
    },
    Stat {
        label: t("PROJECTS", "PROJEKTY"),
        value: Text::same("10+"),
    },
    Stat {
        label: t("EXPERIENCE", "DOŚWIADCZENIE"),
        value: t("1+ yr", "1+ rok"),
    },
    Stat {
        label: t("COFFEE", "KAWA"),
        value: Text::same("∞ ml"),
    },
];

// Skills

pub const SKILLS_TITLE: Text = Text::same("$ ./skills-scan.exe");
pub const SKILLS_COMMAND: Text = Text::same("> scan --profile avui.dev");
pub const SKILLS_COVERAGE: Text = t("coverage", "pokrycie");

pub struct SkillModule {
    pub label: Text,
    pub score: u8,
    pub items: &'static [&'static str],
    pub description: Text,
}

pub const SKILL_MODULES: [SkillModule; 6] = [
    SkillModule {
        label: t("Backend & APIs", "Backend i API"),
        score: 10,
        items: &["C#", ".NET", "ASP.NET Core", "Entity Framework Core", "REST API", "Swagger / OpenAPI", "FastAPI", "ONNX Runtime (.NET)"],
        description: t(
            "I build APIs, backend logic, DTO-based data flows, service integrations, and business-oriented application backends in .NET and Python.",
            "Tworzę API, logikę backendową, przepływy danych oparte o DTO, integracje usług oraz backendy aplikacji biznesowych w .NET i Pythonie.",
        ),
    },
    SkillModule {
        label: t("Frontend & UI", "Frontend i UI"),
        score: 9,
        items: &["React", "TypeScript", "Angular", "Blazor", "Vite", "Tailwind CSS", "HTML5 / CSS3"],
        description: t(
            "I create responsive interfaces, dashboards, portfolio sections, and polished app views with a focus on clarity, interaction, and visual structure.",
            "Tworzę responsywne interfejsy, dashboardy, sekcje portfolio oraz dopracowane widoki aplikacji z naciskiem na czytelność, interakcję i dobrą strukturę wizualną.",
        ),
    },
    SkillModule {
        label: t("Data / ML / Analysis", "Data / ML / Analiza"),
        score: 8,
        items: &["Python", "NumPy", "Pandas", "Scikit-learn", "PyTorch", "statsmodels", "NetworkX"],
        description: t(
            "I work on forecasting, classification, neural networks, graph analysis, and experiment-driven data workflows used in both academic and portfolio projects.",
            "Pracuję nad prognozowaniem, klasyfikacją, sieciami neuronowymi, analizą grafów oraz eksperymentalnymi workflow danych w projektach uczelnianych i portfolio.",
        ),
    },
    SkillModule {
        label: t("Databases", "Bazy danych"),
        score: 8,
        items: &["MSSQL", "PostgreSQL", "SQLite", "SQL", "Entity Framework Core"],
        description: t(
            "I design relational schemas, write queries, and connect persistence layers to the applications that use them.",
            "Projektuję relacyjne schematy, piszę zapytania i łączę warstwy trwałości danych z aplikacjami, które z nich korzystają.",
        ),
    },
    SkillModule {
        label: t("Algorithms", "Algorytmy"),
        score: 8,
        items: &["C++", "STL", "Data Structures", "Compression Algorithms", "Signal Processing", "Parsing / Binary Formats", "CLI Applications"],
        description: t(
            "I build algorithmic and systems-oriented projects in C++, including compression, signal processing, simulation, and work with structured binary data.",
            "Tworzę projekty algorytmiczne i systemowe w C++, obejmujące kompresję, przetwarzanie sygnałów, symulacje oraz pracę ze strukturalnymi danymi binarnymi.",
        ),
    },
    SkillModule {
        label: Text::same("Creative / Design / 3D"),
        score: 7,
        items: &["Figma", "Canva", "UI / UX Design", "Three.js", "3ds Max", "AutoCAD", "Aseprite", "Godot"],
        description: t(
            "I use creative tools for UI concepts, portfolio visuals, interactive web visuals, prototyping, and selected 3D or game-oriented work.",
            "Korzystam z narzędzi kreatywnych do konceptów UI, wizualizacji portfolio, interaktywnych form webowych, prototypowania oraz wybranych prac 3D i game-dev.",
        ),
    },
];

// Experience

pub const EXPERIENCE_TITLE: Text = Text::same("$ git log --stat --oneline");

pub struct Commit {
    pub id: &'static str,
    pub branch: &'static str,
    pub company: &'static str,
    pub title: Text,
    pub description: Text,
    pub tags: &'static [&'static str],
    pub period: Text,
    pub files_changed: u32,
    pub insertions: u32,
    pub deletions: u32,
}

pub const EXPERIENCE: [Commit; 3] = [
    Commit {
        id: "a1b2ca3",
        branch: "HEAD → ambassador",
        company: "Commerzbank",
        title: t("Ambassador", "Ambasadorka"),
        description: t(
            "Representing Commerzbank in student-oriented initiatives, participating in trainings, IT events, and career fairs, and helping promote technology, software engineering, and computer science among students.",
            "Reprezentowanie Commerzbanku w inicjatywach skierowanych do studentów, udział w szkoleniach, wydarzeniach IT oraz targach pracy, a także wspieranie promocji technologii, inżynierii oprogramowania i informatyki wśród studentów.",
        ),
        tags: &["Ambassador", "Employer Branding", "IT Events", "Career Fairs", "Trainings"],
        period: t("2026-03 — Present", "2026-03 — Obecnie"),
        files_changed: 21,
        insertions: 42,
        deletions: 0,
    },
    Commit {
        id: "a1b2ca2",
        branch: "HEAD → engineer",
        company: "De Heus",
        title: t(".NET Developer Intern", "Stażystka .NET Developer"),
        description: t(
            "Developing and maintaining business applications using C#, ASP.NET Core, Blazor, Entity Framework Core, Angular, DevExpress, WPF, and MSSQL in an Agile environment.",
            "Tworzenie i utrzymywanie aplikacji biznesowych z wykorzystaniem C#, ASP.NET Core, Blazor, Entity Framework Core, Angular, DevExpress, WPF i MSSQL w środowisku Agile.",
        ),
        tags: &["C#", "ASP.NET Core", "Blazor", "Angular", "MSSQL", "Agile"],
        period: t("2025-10 — Present", "2025-10 — Obecnie"),
        files_changed: 11,
        insertions: 100,
        deletions: 10,
    },
    Commit {
        id: "a1b2ca1",
        branch: "HEAD → developer",
        company: "University of Łódź",
        title: t("Computer Science Student", "Studentka Informatyki"),
        description: t(
            "Building academic and portfolio projects in algorithms, data structures, simulations, signal processing, and machine learning.",
            "Tworzenie projektów akademickich i portfoliowych z zakresu algorytmów, struktur danych, symulacji, przetwarzania sygnałów i machine learningu.",
        ),
        tags: &["C++", "Python", "Algorithms", "Machine Learning", "Full-Stack"],
        period: t("2023-10 — Present", "2023-10 — Obecnie"),
        files_changed: 4,
        insertions: 128,
        deletions: 15,
    },
];

// Projects

pub const PROJECTS_TITLE: Text = t("$ ls ~/projects --pinned", "$ ls ~/projekty --pinned");

pub struct Project {
    pub name: &'static str,
    pub url: &'static str,
    pub description: Text,
    pub tags: &'static [&'static str],
    pub language: &'static str,
    pub stars: u32,
    pub forks: u32,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        name: "DocuMind-AI",
        url: "https://github.com/Avuii/DocuMind-AI",
        description: t(
            "Document intelligence MVP for invoice and receipt extraction with .NET, FastAPI, OCR, ML, and PostgreSQL.",
            "MVP document intelligence do ekstrakcji danych z faktur i paragonów z wykorzystaniem .NET, FastAPI, OCR, ML i PostgreSQL.",
        ),
        tags: &[".NET", "FastAPI", "OCR", "ML", "PostgreSQL", "React"],
        language: "C#",
        stars: 8,
        forks: 2,
    },
    Project {
        name: "AsteroidSafe",
        url: "https://github.com/Avuii/AsteroidSafe",
        description: t(
            "ML-powered .NET data platform for classifying potentially hazardous asteroids using NASA datasets.",
            "Platforma danych oparta na .NET i ML do klasyfikacji potencjalnie niebezpiecznych asteroid na podstawie danych NASA.",
        ),
        tags: &["C#", ".NET", "Python", "ONNX", "ML", "NASA API"],
        language: "C#",
        stars: 12,
        forks: 3,
    },
    Project {
        name: "Conway's Game of Life",
        url: "https://github.com/Avuii/ConowayGameOfLife",
        description: t(
            "Interactive full-stack implementation of Conway's Game of Life with Blazor WebAssembly, ASP.NET Core API, and SQL persistence.",
            "Interaktywna full-stackowa implementacja Gry w Życie Conwaya z użyciem Blazor WebAssembly, ASP.NET Core API i trwałości danych w SQL.",
        ),
        tags: &["Blazor", "ASP.NET Core", "SQL", "WebAssembly"],
        language: "C#",
        stars: 6,
        forks: 1,
    },
    Project {
        name: "EUR/PLN Tracker",
        url: "https://github.com/Avuii/EUR-PLN-Tracker",
        description: t(
            "Interactive forecasting dashboard combining a .NET backend, frontend UI, and Python-based time-series models.",
            "Interaktywny dashboard prognostyczny łączący backend .NET, frontend UI oraz modele szeregów czasowych oparte na Pythonie.",
        ),
        tags: &[".NET", "React", "Python", "Time Series", "Forecasting"],
        language: "TypeScript",
        stars: 10,
        forks: 2,
    },
];

// Why

pub const WHY_FILE: Text = t("WHY_WORK_WITH_ME.md", "DLACZEGO_JA.md");

pub struct Feature {
    pub title: Text,
    pub description: Text,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: t(
            "feat: practical software mindset",
            "feat: praktyczne podejście do tworzenia oprogramowania",
        ),
        description: t(
            "I focus on software that is useful, maintainable, and built for real needs.",
            "Skupiam się na oprogramowaniu, które jest użyteczne, łatwe w utrzymaniu i budowane dla rzeczywistych potrzeb.",
        ),
    },
    Feature {
        title: t("feat: full-stack perspective", "feat: perspektywa full-stack"),
        description: t(
            "I'm comfortable moving between backend logic, data models, APIs, and frontend interfaces.",
            "Swobodnie poruszam się między logiką backendu, modelami danych, API i interfejsami frontend.",
        ),
    },
    Feature {
        title: t(
            "feat: strong technical foundation",
            "feat: solidne podstawy techniczne",
        ),
        description: t(
            "My academic background helps me understand algorithms, data structures, and problem-solving deeply.",
            "Moje wykształcenie akademickie pomaga mi głęboko rozumieć algorytmy, struktury danych i rozwiązywanie problemów.",
        ),
    },
    Feature {
        title: t(
            "feat: fast learner, hands-on builder",
            "feat: szybka nauka i praktyczne podejście",
        ),
        description: t(
            "I like learning by building, from business applications to machine learning experiments and interactive tools.",
            "Lubię uczyć się przez tworzenie, od aplikacji biznesowych po eksperymenty z machine learningiem i interaktywne narzędzia.",
        ),
    },
];

// Contact

pub const CONTACT_TITLE: Text = t("$ ./contact.exe", "$ ./kontakt.exe");
pub const CONTACT_COMMENT: Text = t(
    "// Run this script to send a message",
    "// Uruchom ten skrypt, aby wysłać wiadomość",
);
pub const CONTACT_LINKS: Text = t("// Links:", "// Linki:");
pub const CONTACT_NAME_LABEL: Text = t("name", "imię");
pub const CONTACT_EMAIL_LABEL: Text = Text::same("email");
pub const CONTACT_MESSAGE_LABEL: Text = t("message", "wiadomość");
pub const CONTACT_NAME_PLACEHOLDER: Text = t("Your Name", "Twoje imię");
pub const CONTACT_EMAIL_PLACEHOLDER: Text = t("your@email.com", "twoj@email.com");
pub const CONTACT_MESSAGE_PLACEHOLDER: Text =
    t("Type your message here...", "Wpisz swoją wiadomość tutaj...");
pub const CONTACT_SUBMIT_IDLE: Text = t("RUN SCRIPT", "URUCHOM SKRYPT");
pub const CONTACT_SUBMIT_LOADING: Text = t("Sending...", "Wysyłanie...");
pub const CONTACT_SUCCESS: Text = t(
    "Message sent successfully!",
    "Wiadomość została wysłana pomyślnie!",
);
pub const CONTACT_NETWORK_ERROR: Text = t(
    "Something went wrong. Try again.",
    "Coś poszło nie tak. Spróbuj ponownie.",
);
pub const CONTACT_VALIDATION_ERROR: Text =
    t("Please fill in all fields.", "Uzupełnij wszystkie pola.");
pub const CONTACT_FORM_HINT: Text = t(
    "i: edit form · Tab: next field · Ctrl+S: send · Esc: leave · y: copy email",
    "i: edycja · Tab: następne pole · Ctrl+S: wyślij · Esc: wyjdź · y: kopiuj email",
);

pub struct ContactInfo {
    pub status: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub discord: &'static str,
    pub location: &'static str,
}

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    status: "open_to_work",
    email: CONTACT_EMAIL,
    github: "@Avuii",
    linkedin: "@Katarzyna Stańczyk",
    discord: "691598855988314152",
    location: "Łódź, Poland",
};

pub const FOOTER_ROLE: &str = "Software Engineer";

//! Site content
//!
//! Every block of text the terminal can print. The engine treats these as
//! opaque payloads and passes them straight through to the view.

use super::command::EchoCommand;

/// Pre-rendered content the engine hands to the view untouched.
pub type Payload = &'static str;

/// ASCII banner printed above the session. The © line is appended by the
/// view layer, which knows the current year.
pub const BANNER: &str = r#" _____             __   _______   ______
|_   _|            \ \ / /  ___|  | ___ \
  | |  __ _ _ __    \ V /| |__    | |_/ /_ _ _ __
  | | / _` | '_ \    \ / |  __|   |  __/ _` | '_ \
 _| || (_| | | | |   | |_| |____  | | | (_| | | | |
 \___/\__,_|_| |_|   \_(_)____(_) \_|  \__,_|_| |_|"#;

pub const WELCOME: &str = "Welcome to my cyberspace, fellow human.

Type 'help' to view a list of available commands.";

/// Prompt glyph the site boots with.
pub const PROMPT: &str = ">";

/// Where the CV is served from, relative to the page.
pub const CV_URI: &str = "CV.pdf";

/// Suggested file name for the saved CV.
pub const CV_FILE_NAME: &str = "Ian Pan - Curriculum Vitae.pdf";

/// The two-line rebuke for input outside the vocabulary. Embeds the first
/// whitespace-delimited token of the offending input.
pub fn error_message(input: &str) -> String {
    let token = input.split_whitespace().next().unwrap_or("");
    format!(
        "What are you typing \"{}\" for??\n\
         Told you to type 'help' to view a list of available commands bruh!",
        token
    )
}

/// Look up the content block for an echo command.
pub fn payload(command: EchoCommand) -> Payload {
    match command {
        EchoCommand::Help => HELP,
        EchoCommand::About => ABOUT,
        EchoCommand::Projects => PROJECTS,
        EchoCommand::Contact => CONTACT,
        EchoCommand::Awards => AWARDS,
        EchoCommand::Repo => REPO,
        EchoCommand::Skills => SKILLS,
        EchoCommand::Website => WEBSITE,
    }
}

const HELP: Payload = "Type any of the commands below to get some more info.
Press [tab] to autocomplete. Press '.' to show command hints.

about        My brief self-introduction
projects     Yeah, I've made some cool stuff before
skills       Programming languages & frameworks etc.
awards       A bit of boasting
repo         Take a look at some of my work
download_cv  Check out my resume in PDF
contact      My email, LinkedIn, Github etc.
website      How I built this
all          Tell me everything
clear        Clears the terminal of all output";

const ABOUT: Payload = "Hi! My name is Ian Yi-En Pan. Born and raised in the beautiful city of
Taipei, I currently travel between Cupertino, Hong Kong, and my hometown.

I'm a penultimate-year Computer Science undergraduate and Google DSC Core
Team Member, former R3 Corda blockchain software engineer intern at
CryptoBLK, current STEM & coding instructor at FCA, cybersecurity world
finalist team leader, and back-end developer and Python instructor at
Circle-Coding CUHK. I've received international awards in marketing, and
have in-depth experience with investment analysis and software development.

I love combat sports, especially Boxing & Muay Thai. I train weekly and
spar with my friends in my free time. I was the vocalist and rhythm
guitarist in a local alternative rock band based in my hometown. I still
write songs every now and then, mostly composing on guitar and piano.

My contact details can be found by typing 'contact', and if you would like
to check out my CV, simply type 'download_cv'.";

const PROJECTS: Payload = "I'm always working on comp sciey (not really a word) things. Why don't
you check out a few of my public code repositories? Just type 'repo' to
get the links.

I have my own startup called WeaverWorks (https://weaverworks.co.za) that
provides property managers and buildings with some really cool software.
The project uses TypeScript, Node.js, React (with Material-UI components)
and Firebase.

You can also check out my MSc thesis, \"An investigation into the
applicability of a blockchain based voting system\" - this one took a
while!";

const CONTACT: Payload = "Email     ianpan870102@gmail.com
LinkedIn  https://www.linkedin.com/in/ian-yi-en-pan-543947156
GitHub    https://github.com/ianpan870102";

const AWARDS: Payload = "2016  University of Oxford full scholarship
      Standard Bank Africa Chairman's Scholarship

2015  Dean's Merit List

2014  Dean's Merit List
      BSG Prize (Best 3rd year Computer Science student)
      Class Medal (1st place) for all 3 Computer Science courses
      Commerce Faculty Scholarship

2013  Dean's Merit List
      Computer Science Merit Award (top 5%)
      Class Medal for Inferential Statistics
      Commerce Faculty Scholarship

2012  Dean's Merit List
      Computer Science Merit Award (top 5%)";

const REPO: Payload = "GitHub     https://github.com/ianpan870102
           Unfortunately, I could only make a small subset of my projects
           public.
Bitbucket  https://bitbucket.org/fldcra001
           A few university projects.";

const SKILLS: Payload = "C/C++
  [############# ]
Python
  [############# ]
Java
  [###########   ]
Machine Learning/TensorFlow/Scikit-Learn
  [###########   ]
Kotlin
  [#####         ]

JavaScript/React/Web dev.
  [############  ]";

const WEBSITE: Payload = "I built this website from scratch in Rust, compiled to WebAssembly, with
xterm.js as the rendering surface. It is a rewrite of my previous website
that used the JQuery Terminal Plugin (and some inspiration from Ronnie
Pyne, http://www.ronniepyne.com).

The source code for this site can be found on GitHub. Feel free to use
this website for inspiration, or go ahead and copy some of the code! If
you do, all I ask is that you give this site a mention :)";

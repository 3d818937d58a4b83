mod about;
mod all;
mod contact;
mod experience;
mod footer;
mod hero;
mod log;
pub mod page;
mod projects;
mod rail;
mod skills;
mod top_bar;
mod why;

use self::log::log;
use super::*;
use footer::footer;
use page::render as page;
use rail::rail;
use top_bar::top_bar;

pub use all::all as render;

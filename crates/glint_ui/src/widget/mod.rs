//! The declarative verbs a UI description is written in.
//!
//! Every verb is a method on [`crate::Gui`] and runs in both passes: while
//! measuring it appends elements and grows the current group, while
//! rendering it matches its element, places it, draws it and reports
//! events. Verbs never fail; misuse is recorded and returned from
//! [`crate::Ui::run`].
//!
//! | Module        | Verbs                                                      |
//! |---------------|------------------------------------------------------------|
//! | `container`   | groups, margins, root placement, backgrounds, text color   |
//! | `leaf`        | image, label, custom element, raw texture draws            |
//! | `edit`        | editable text field                                        |
//! | `scroll`      | scroll regions                                             |
//! | `slider`      | sliders                                                    |

mod container;
mod edit;
mod leaf;
mod scroll;
mod slider;

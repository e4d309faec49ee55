//! Static command summaries for every category

const HELP_TEXT: &str = "\
Commands by category:

contacts
  add <name>,<phone> | delete <name> | find <name> | list

expenses
  add <description>,<amount>,<YYYY-MM-DD> | delete <n> | list | total

places
  add <name> | delete <n> | find <keyword> | list

tasks
  todo <description>
  deadline <description> by <YYYY-MM-DD HH:mm:ss>
  event <description> at <YYYY-MM-DD HH:mm:ss-HH:mm:ss>
  list | mark <n> | unmark <n> | delete <n> | find <keyword>
  upcoming | progress

notes
  add <text> | delete <n> | list

change password
  guided prompt

Type a category name to enter it, 'back' to leave it, 'bye' to exit.";

pub fn render() -> &'static str {
    HELP_TEXT
}

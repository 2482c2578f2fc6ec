// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn required(name: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(long).required(true).help(help)
}

fn optional(name: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(long).help(help)
}

pub fn build_cli() -> Command {
    Command::new("controle")
        .about("Personal finance: transactions, cards, spending goals, analytics and quote comparison")
        .version(crate_version!())
        .subcommand(Command::new("init").about("Initialize the local store"))
        .subcommand(
            Command::new("profile")
                .about("Manage the local profile")
                .subcommand(
                    Command::new("register")
                        .about("Create or replace the profile")
                        .arg(required("name", "name", "Full name"))
                        .arg(required("email", "email", "Email address"))
                        .arg(required("password", "password", "Password (stored as-is; local only)"))
                        .arg(optional("goal", "goal", "Monthly spending goal (default 3000)")),
                )
                .subcommand(json_flags(Command::new("show").about("Show the profile")))
                .subcommand(
                    Command::new("goal")
                        .about("Set the monthly spending goal")
                        .arg(required("amount", "amount", "Goal amount")),
                )
                .subcommand(
                    Command::new("name")
                        .about("Rename the profile")
                        .arg(required("name", "name", "New display name")),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and browse transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense entry")
                        .arg(required("title", "title", "Description"))
                        .arg(required("amount", "amount", "Amount (total value for installment purchases)"))
                        .arg(
                            optional("type", "type", "income|expense")
                                .default_value("expense"),
                        )
                        .arg(
                            optional("method", "method", "pix|cash|debit|credit")
                                .default_value("pix"),
                        )
                        .arg(optional("card", "card", "Card id or bank name (debit/credit)"))
                        .arg(
                            optional("category", "category", "Category key")
                                .default_value("outras_despesas"),
                        )
                        .arg(
                            optional("installments", "installments", "Installment count (credit only)")
                                .value_parser(value_parser!(u32))
                                .default_value("1"),
                        )
                        .arg(optional("date", "date", "Backdate (YYYY-MM-DD, default today)")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List the expanded ledger for a month, newest first")
                        .arg(optional("month", "month", "Month (YYYY-MM, default current)"))
                        .arg(
                            optional("type", "type", "all|income|expense")
                                .default_value("all"),
                        )
                        .arg(
                            optional("limit", "limit", "Maximum rows")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(
                            Arg::new("raw")
                                .long("raw")
                                .action(ArgAction::SetTrue)
                                .help("Show stored records without installment expansion"),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction (installment ids resolve to the base record)")
                        .arg(required("id", "id", "Transaction id")),
                ),
        )
        .subcommand(
            Command::new("special")
                .about("Record special operations with a payment reminder")
                .subcommand(
                    Command::new("boca")
                        .about("Record an informal ('boca') purchase")
                        .arg(required("amount", "amount", "Amount"))
                        .arg(required("person", "person", "Person or establishment"))
                        .arg(required("due", "due", "Payment due date (YYYY-MM-DD)")),
                )
                .subcommand(
                    Command::new("loan")
                        .about("Record an informal loan")
                        .arg(required("amount", "amount", "Amount"))
                        .arg(required("person", "person", "Counterparty"))
                        .arg(required("due", "due", "Payment due date (YYYY-MM-DD)"))
                        .arg(
                            optional("direction", "direction", "given|taken")
                                .default_value("given"),
                        ),
                ),
        )
        .subcommand(
            Command::new("card")
                .about("Manage payment cards")
                .subcommand(
                    Command::new("add")
                        .about("Register a card")
                        .arg(required("bank", "bank", "Bank name"))
                        .arg(required("limit", "limit", "Credit limit (or account balance for debit)"))
                        .arg(optional("type", "type", "credit|debit").default_value("credit"))
                        .arg(
                            optional("due-day", "due-day", "Statement due day")
                                .value_parser(value_parser!(u32))
                                .default_value("10"),
                        )
                        .arg(
                            optional("closing-day", "closing-day", "Statement closing day")
                                .value_parser(value_parser!(u32))
                                .default_value("1"),
                        )
                        .arg(optional("color", "color", "Display color").default_value("#10b981")),
                )
                .subcommand(json_flags(Command::new("list").about("List cards")))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a card")
                        .arg(required("id", "id", "Card id or bank name")),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated views over the expanded ledger")
                .subcommand(json_flags(
                    Command::new("summary")
                        .about("Month totals vs the previous month, plus goal usage")
                        .arg(optional("month", "month", "Month (YYYY-MM, default current)")),
                ))
                .subcommand(json_flags(
                    Command::new("breakdown")
                        .about("Outflow by category for a month")
                        .arg(optional("month", "month", "Month (YYYY-MM, default current)"))
                        .arg(
                            Arg::new("all")
                                .long("all")
                                .action(ArgAction::SetTrue)
                                .help("Show every category, not just the top 5"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("compare")
                        .about("Arbitrary date range vs the preceding range of equal length")
                        .arg(required("from", "from", "Range start (YYYY-MM-DD)"))
                        .arg(required("to", "to", "Range end (YYYY-MM-DD), inclusive")),
                ))
                .subcommand(json_flags(
                    Command::new("flow")
                        .about("Monthly income/outflow for a year")
                        .arg(
                            optional("year", "year", "Year (default current)")
                                .value_parser(value_parser!(i32)),
                        ),
                )),
        )
        .subcommand(
            Command::new("project")
                .about("Purchase-quote projects")
                .subcommand(
                    Command::new("add")
                        .about("Create a project")
                        .arg(required("name", "name", "Project name")),
                )
                .subcommand(json_flags(Command::new("list").about("List projects")))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a project")
                        .arg(required("name", "name", "Project name or id")),
                )
                .subcommand(
                    Command::new("supplier").about("Manage a project's suppliers").subcommand(
                        Command::new("add")
                            .about("Add a supplier to a project")
                            .arg(required("project", "project", "Project name or id"))
                            .arg(required("name", "name", "Supplier name")),
                    ),
                )
                .subcommand(
                    Command::new("item")
                        .about("Manage quoted items")
                        .subcommand(
                            Command::new("add")
                                .about("Quote an item under a supplier")
                                .arg(required("project", "project", "Project name or id"))
                                .arg(required("supplier", "supplier", "Supplier name or id"))
                                .arg(required("name", "name", "Item name (matched exactly across suppliers)"))
                                .arg(required("price", "price", "Quoted price")),
                        )
                        .subcommand(
                            Command::new("rm")
                                .about("Remove a quoted item")
                                .arg(required("project", "project", "Project name or id"))
                                .arg(required("supplier", "supplier", "Supplier name or id"))
                                .arg(required("name", "name", "Item name or id")),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("compare")
                        .about("Supplier ranking and per-item best prices")
                        .arg(required("project", "project", "Project name or id"))
                        .arg(
                            Arg::new("pick")
                                .long("pick")
                                .action(ArgAction::Append)
                                .help("Toggle an item into the purchase selection (repeatable)"),
                        ),
                )),
        )
        .subcommand(json_flags(
            Command::new("reminders").about("Special operations due today or overdue"),
        ))
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .about("Export transactions")
                    .arg(optional("format", "format", "csv|json").default_value("csv"))
                    .arg(required("out", "out", "Output path"))
                    .arg(
                        Arg::new("expanded")
                            .long("expanded")
                            .action(ArgAction::SetTrue)
                            .help("Expand installment purchases before exporting"),
                    ),
            ),
        )
        .subcommand(Command::new("doctor").about("Check stored data for inconsistencies"))
        .subcommand(
            Command::new("reset")
                .about("Clear stored blobs (the manual fallback when data no longer parses)")
                .arg(optional("key", "key", "Single blob key to clear (e.g. cp_transactions)"))
                .arg(
                    Arg::new("all")
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .help("Clear every stored blob"),
                ),
        )
        .subcommand(json_flags(
            Command::new("categories")
                .about("List the category catalog")
                .arg(
                    Arg::new("income")
                        .long("income")
                        .action(ArgAction::SetTrue)
                        .help("Only income categories"),
                )
                .arg(
                    Arg::new("expense")
                        .long("expense")
                        .action(ArgAction::SetTrue)
                        .help("Only expense categories"),
                )
                .arg(optional("search", "search", "Accent-insensitive name filter")),
        ))
}

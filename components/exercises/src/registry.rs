//! The exercise catalog.
//!
//! One entry per demonstration. Each exercise runs against a console and
//! carries its hard-coded expected transcript; the harness compares the
//! two. Exercises never call one another.

use es_values::{to_fixed, Console, EsValue};

use crate::arrows;
use crate::classes::{Thermostat, Vegetable};
use crate::declarations;
use crate::destructuring::{self, Forecast, Stats};
use crate::modules::{string_functions, ModuleGraph, ModuleRecord};
use crate::mutation;
use crate::templates::{self, Person};

/// One runnable exercise.
pub struct Exercise {
    /// Catalog name, used by the CLI
    pub name: &'static str,
    /// One-line description
    pub summary: &'static str,
    /// Run the demonstration against a console
    pub run: fn(&Console),
    /// The hard-coded expected transcript
    pub expected: &'static [&'static str],
}

fn run_check_scope(console: &Console) {
    if let Err(error) = declarations::check_scope(console) {
        console.log_text(&error.to_string());
    }
}

fn run_cat_talk(console: &Console) {
    console.log(&[EsValue::string(declarations::cat_talk())]);
}

fn run_print_many_times(console: &Console) {
    declarations::print_many_times(console, "freeCodeCamp");
}

fn run_edit_in_place(console: &Console) {
    let s = mutation::edit_in_place();
    console.log(&[s]);
}

fn run_freeze_constants(console: &Console) {
    let pi = mutation::freeze_constants(console);
    console.log(&[pi]);
}

fn run_freeze_profile(console: &Console) {
    mutation::freeze_profile(console);
}

fn run_square_list(console: &Console) {
    let real_number_array = [4.0, 5.6, -9.8, 3.14, 42.0, 6.0, 8.34];
    let squared_integers = arrows::square_list(&real_number_array);
    console.log(&[EsValue::from_numbers(&squared_integers)]);
}

fn run_my_concat(console: &Console) {
    let joined = arrows::my_concat(&[1.0, 2.0], &[3.0, 4.0, 5.0]);
    console.log(&[EsValue::from_numbers(&joined)]);
}

fn run_magic(console: &Console) {
    // Rendered at the epoch so the transcript stays fixed; magic()
    // itself produces the current time.
    match arrows::to_date_string(0.0) {
        Ok(date) => console.log_text(&date),
        Err(error) => console.log_text(&error.to_string()),
    }
}

fn run_swap(console: &Console) {
    let (a, b) = destructuring::swap((8.0, 6.0));
    console.log(&[EsValue::number(a)]);
    console.log(&[EsValue::number(b)]);
}

fn run_remove_first_two(console: &Console) {
    let source: Vec<i64> = (1..=10).collect();
    let shorter = destructuring::remove_first_two(&source);
    let as_numbers = |list: &[i64]| {
        EsValue::from_numbers(&list.iter().map(|&n| n as f64).collect::<Vec<_>>())
    };
    console.log(&[as_numbers(&shorter)]);
    console.log(&[as_numbers(&source)]);
}

fn run_half(console: &Console) {
    console.log(&[EsValue::number(destructuring::half(&Stats::sample()))]);
}

fn run_today_span(console: &Console) {
    let (low, high) = destructuring::today_span(&Forecast::local());
    console.log(&[EsValue::string("Today's low is"), EsValue::number(low)]);
    console.log(&[EsValue::string("Today's high is"), EsValue::number(high)]);
}

fn run_make_greeting(console: &Console) {
    for sentence in templates::make_greeting(&Person::sample()) {
        console.log(&[EsValue::string(sentence)]);
    }
}

fn run_make_list(console: &Console) {
    let failures = vec![
        "no-var".to_string(),
        "var-on-top".to_string(),
        "linebreak".to_string(),
    ];
    for item in templates::make_list(&failures) {
        console.log(&[EsValue::string(item)]);
    }
}

fn run_vegetable(console: &Console) {
    let carrot = Vegetable::new("carrot");
    console.log(&[EsValue::string(carrot.name())]);
}

fn run_thermostat(console: &Console) {
    let mut thermostat = Thermostat::new(76.0);
    let log_fixed = |value: f64, digits: u32| match to_fixed(value, digits) {
        Ok(text) => console.log_text(&text),
        Err(error) => console.log_text(&error.to_string()),
    };
    log_fixed(thermostat.temperature(), 2);
    thermostat.set_temperature(26.0);
    log_fixed(thermostat.temperature(), 2);
    log_fixed(thermostat.fahrenheit(), 1);
}

fn run_string_functions(console: &Console) {
    console.log(&[EsValue::string(string_functions::uppercase_string("hello"))]);
    console.log(&[EsValue::string(string_functions::lowercase_string("World!"))]);
}

fn run_module_graph(console: &Console) {
    let mut graph = ModuleGraph::new();
    graph.add(
        ModuleRecord::new("./string_functions.js")
            .export("uppercaseString")
            .export("lowercaseString"),
    );
    graph.add(
        ModuleRecord::new("./index.js")
            .import("./string_functions.js", "uppercaseString")
            .import("./string_functions.js", "lowercaseString"),
    );
    match graph.link("./index.js") {
        Ok(()) => console.log_text("./index.js is linked"),
        Err(error) => console.log_text(&error.to_string()),
    }

    let mut broken = ModuleGraph::new();
    broken.add(ModuleRecord::new("./string_functions.js").export("uppercaseString"));
    broken.add(ModuleRecord::new("./main.js").import("./string_functions.js", "findLongestWord"));
    if let Err(error) = broken.link("./main.js") {
        console.log_text(&error.to_string());
    }
}

/// All exercises in fixed catalog order.
pub const CATALOG: &[Exercise] = &[
    Exercise {
        name: "check-scope",
        summary: "block scope vs function scope for let bindings",
        run: run_check_scope,
        expected: &[
            "Block scope i is: block scope",
            "Function scope i is: function scope",
        ],
    },
    Exercise {
        name: "cat-talk",
        summary: "let declarations under strict mode",
        run: run_cat_talk,
        expected: &["Oliver says Meow!"],
    },
    Exercise {
        name: "print-many-times",
        summary: "const sentence logged once per even index",
        run: run_print_many_times,
        expected: &[
            "freeCodeCamp is cool!",
            "freeCodeCamp is cool!",
            "freeCodeCamp is cool!",
            "freeCodeCamp is cool!",
            "freeCodeCamp is cool!",
            "freeCodeCamp is cool!",
        ],
    },
    Exercise {
        name: "edit-in-place",
        summary: "mutate a const-bound array by element assignment",
        run: run_edit_in_place,
        expected: &["[2, 5, 7]"],
    },
    Exercise {
        name: "freeze-constants",
        summary: "strict-mode write to a frozen object, caught and logged",
        run: run_freeze_constants,
        expected: &[
            "TypeError: Cannot assign to read only property 'PI' of object",
            "3.14",
        ],
    },
    Exercise {
        name: "freeze-profile",
        summary: "sloppy-mode writes to a frozen object, silently ignored",
        run: run_freeze_profile,
        expected: &["{ name: \"FreeCodeCamp\", review: \"Awesome\" }"],
    },
    Exercise {
        name: "square-list",
        summary: "filter positive integers and square them",
        run: run_square_list,
        expected: &["[16, 1764, 36]"],
    },
    Exercise {
        name: "my-concat",
        summary: "concatenation via a one-expression closure",
        run: run_my_concat,
        expected: &["[1, 2, 3, 4, 5]"],
    },
    Exercise {
        name: "magic",
        summary: "no-argument closure producing a date, rendered at the epoch",
        run: run_magic,
        expected: &["Thu Jan 01 1970"],
    },
    Exercise {
        name: "swap",
        summary: "swap two bindings through destructuring",
        run: run_swap,
        expected: &["6", "8"],
    },
    Exercise {
        name: "remove-first-two",
        summary: "rest pattern binds the tail, source untouched",
        run: run_remove_first_two,
        expected: &[
            "[3, 4, 5, 6, 7, 8, 9, 10]",
            "[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]",
        ],
    },
    Exercise {
        name: "half",
        summary: "destructure max and min from a statistics record",
        run: run_half,
        expected: &["28.015"],
    },
    Exercise {
        name: "today-span",
        summary: "nested destructuring of the local forecast",
        run: run_today_span,
        expected: &["Today's low is 64", "Today's high is 77"],
    },
    Exercise {
        name: "make-greeting",
        summary: "template literal interpolation",
        run: run_make_greeting,
        expected: &["Hello, my name is Zodiac Hasbro!", "I am 56 years old."],
    },
    Exercise {
        name: "make-list",
        summary: "one warning list item per failure string",
        run: run_make_list,
        expected: &[
            "<li class=\"text-warning\">no-var</li>",
            "<li class=\"text-warning\">var-on-top</li>",
            "<li class=\"text-warning\">linebreak</li>",
        ],
    },
    Exercise {
        name: "vegetable",
        summary: "bare class constructor",
        run: run_vegetable,
        expected: &["carrot"],
    },
    Exercise {
        name: "thermostat",
        summary: "getter/setter pair converting between temperature scales",
        run: run_thermostat,
        expected: &["24.44", "26.00", "78.8"],
    },
    Exercise {
        name: "string-functions",
        summary: "import named functions across a module boundary",
        run: run_string_functions,
        expected: &["HELLO", "world!"],
    },
    Exercise {
        name: "module-graph",
        summary: "link module records, resolving imports against exports",
        run: run_module_graph,
        expected: &[
            "./index.js is linked",
            "ReferenceError: The requested module './string_functions.js' does not \
             provide an export named 'findLongestWord'",
        ],
    },
];

/// All exercises in catalog order.
pub fn catalog() -> &'static [Exercise] {
    CATALOG
}

/// Look up an exercise by name.
pub fn find(name: &str) -> Option<&'static Exercise> {
    CATALOG.iter().find(|e| e.name == name)
}

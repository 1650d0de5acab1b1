//! Prompt fixtures for each demonstrated prompting pattern.
//!
//! These are content, not logic: the requester never sees anything but the
//! final prompt string.

pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    prompt: fn() -> String,
}

impl Pattern {
    pub fn prompt(&self) -> String {
        (self.prompt)()
    }
}

pub fn all() -> Vec<Pattern> {
    vec![
        Pattern {
            name: "summarize",
            description: "Condense delimited text into a single sentence",
            prompt: summarize,
        },
        Pattern {
            name: "structured",
            description: "Request output in a structured format with named keys",
            prompt: structured,
        },
        Pattern {
            name: "steps",
            description: "Rewrite instructions found in text as numbered steps",
            prompt: steps,
        },
        Pattern {
            name: "no-steps",
            description: "Same instruction-extraction prompt on text with no instructions",
            prompt: no_steps,
        },
        Pattern {
            name: "few-shot",
            description: "Establish a style with one example exchange, then continue it",
            prompt: few_shot,
        },
        Pattern {
            name: "workflow",
            description: "Specify the intermediate steps and output format of a task",
            prompt: workflow,
        },
        Pattern {
            name: "verify",
            description: "Ask the model to check a worked solution before judging it",
            prompt: verify,
        },
    ]
}

pub fn find(name: &str) -> Option<Pattern> {
    all().into_iter().find(|pattern| pattern.name == name)
}

fn summarize() -> String {
    let text = "\
You should express what you want a model to do by providing instructions \
that are as clear and specific as you can possibly make them. This will \
guide the model towards the desired output, and reduce the chances of \
receiving irrelevant or incorrect responses. Don't confuse writing a clear \
prompt with writing a short prompt. In many cases, longer prompts provide \
more clarity and context for the model, which can lead to more detailed \
and relevant outputs.";

    format!(
        "Summarize the text delimited by triple backticks into a single sentence.\n\
         ```{text}```"
    )
}

fn structured() -> String {
    "Generate a list of 5 song titles by Taylor Swift along with their \
publish year and genres.\n\
Provide them in HTML format with the following keys:\n\
book_id, title, author, genre."
        .to_string()
}

const STEPS_INSTRUCTIONS: &str = "\
You will be provided with text delimited by triple quotes.
If it contains a sequence of instructions, re-write those instructions \
in the following format:

Step 1 - ...
Step 2 - ...
...
Step N - ...

If the text does not contain a sequence of instructions, then simply \
write \"No steps provided.\"";

fn steps() -> String {
    let text = "\
Making a cup of tea is easy! First, you need to get some water boiling. \
While that's happening, grab a cup and put a tea bag in it. Once the water \
is hot enough, just pour it over the tea bag. Let it sit for a bit so the \
tea can steep. After a few minutes, take out the tea bag. If you like, you \
can add some sugar or milk to taste. And that's it! You've got yourself a \
delicious cup of tea to enjoy.";

    format!("{STEPS_INSTRUCTIONS}\n\n\"\"\"{text}\"\"\"")
}

fn no_steps() -> String {
    let text = "\
The sun is shining brightly today, and the birds are singing. It's a \
beautiful day to go for a walk in the park. The flowers are blooming, and \
the trees are swaying gently in the breeze. People are out and about, \
enjoying the lovely weather. Some are having picnics, while others are \
playing games or simply relaxing on the grass. It's a perfect day to spend \
time outdoors and appreciate the beauty of nature.";

    format!("{STEPS_INSTRUCTIONS}\n\n\"\"\"{text}\"\"\"")
}

fn few_shot() -> String {
    "Your task is to answer in a consistent style.\n\n\
<child>: Teach me about patience.\n\n\
<grandparent>: The river that carves the deepest valley flows from a \
modest spring; the grandest symphony originates from a single note; the \
most intricate tapestry begins with a solitary thread.\n\n\
<child>: Teach me about resilience."
        .to_string()
}

fn workflow() -> String {
    let text = "\
Gold prices jumped to record high and the dollar was on the rise again on \
Wednesday, keeping the pressure on the yen and the euro, while stocks in \
Asia stuttered as investors were reluctant to place major bets ahead of a \
hotly contested U.S. election. The shifting expectations around how fast \
and deep the Federal Reserve will cut rates have also hurt risk sentiment, \
with traders now anticipating the U.S. central bank to be measured in its \
easing. That has taken U.S. Treasury yields to a three-month peak and the \
dollar to multi-month highs against the euro, sterling and the yen, which \
is now back at 150 per dollar levels, prompting verbal warnings from \
Japanese officials. MSCI's broadest index of Asia-Pacific shares outside \
Japan was last 0.06% higher. Tokyo's Nikkei was slightly lower in early \
trading. \"Volatility within a range bound trade is increasingly becoming \
the norm, as markets brace for pivotal weeks ahead, including the U.S. \
presidential election and a heavy corporate earnings agenda,\" said \
Anderson Alves, a trader with ActivTrades. China and Hong Kong stocks made \
a steady open of trade on Wednesday, as the promise of government help for \
the economy supported the major indexes to settle in at higher levels.";

    format!(
        "Your task is to perform the following actions:\n\
1 - Summarize the following text delimited by <> with 1 sentence.\n\
2 - List all the numbers in the text and their meanings.\n\
3 - List each name in the summary.\n\
4 - Output a json object that contains the following keys: names, numbers.\n\n\
Use the following format:\n\
Text: <text to summarize>\n\
Summary: <summary>\n\
Numbers summary: <numbers summary>\n\
Names: <list of names in summary>\n\
Output JSON: <json with names and numbers>\n\n\
Text: <{text}>"
    )
}

fn verify() -> String {
    "Determine if the student's solution is correct or not.\n\
If the student's solution is not correct, show the correct solution in \
the format that has no punctation.\n\n\
Question:\n\
I'm building a solar power installation and I need help working out the \
financials.\n\
- Land costs $100 / square foot\n\
- I can buy solar panels for $250 / square foot\n\
- I negotiated a contract for maintenance that will cost me a flat $100k \
per year, and an additional $10 / square foot\n\
What is the total cost for the first year of operations as a function of \
the number of square feet.\n\n\
Student's Solution:\n\
Let x be the size of the installation in square feet.\n\
Costs:\n\
1. Land cost: 100x\n\
2. Solar panel cost: 250x\n\
3. Maintenance cost: 100,000 + 100x\n\
Total cost: 100x + 250x + 100,000 + 100x = 450x + 100,000"
        .to_string()
}

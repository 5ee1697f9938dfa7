//! Seed data written into an empty knowledge base

use crate::types::{Category, Difficulty, NewCodeExample, NewQaPair};

pub const START_PROJECT_ANSWER: &str = "Here are the steps to start a new Python project:
1. Create a new directory for your project
2. Set up a virtual environment
3. Initialize git repository
4. Create requirements.txt
5. Set up basic project structure";

pub const DEPLOY_ANSWER: &str = "Deployment steps typically include:
1. Prepare your application (debug=False, environment variables)
2. Choose a hosting platform (Heroku, AWS, DigitalOcean)
3. Set up deployment configuration
4. Deploy your application
5. Monitor for any issues";

pub(crate) fn basic_qa_pairs() -> Vec<NewQaPair> {
    vec![
        NewQaPair::new(
            "How do I start a new Python project?",
            START_PROJECT_ANSWER,
            Category::ProjectSetup,
            Difficulty::Beginner,
        ),
        NewQaPair::new(
            "How do I deploy my Python application?",
            DEPLOY_ANSWER,
            Category::Deployment,
            Difficulty::Intermediate,
        ),
    ]
}

pub(crate) fn reference_code_examples() -> Vec<NewCodeExample> {
    vec![
        NewCodeExample::new(
            Category::VirtualEnvironment.as_str(),
            "# python -m venv .venv\n# source .venv/bin/activate\nimport sys\nprint(sys.prefix != sys.base_prefix)",
            "Creates an isolated environment; the check prints True when it is active.",
            Difficulty::Beginner,
        ),
        NewCodeExample::new(
            Category::FlaskFramework.as_str(),
            "from flask import Flask\n\n\ndef create_app():\n    app = Flask(__name__)\n\n    @app.get(\"/health\")\n    def health():\n        return {\"status\": \"ok\"}\n\n    return app",
            "An application factory keeps configuration out of module scope and makes testing easier.",
            Difficulty::Beginner,
        ),
        NewCodeExample::new(
            Category::Testing.as_str(),
            "import pytest\n\n\ndef add(a, b):\n    return a + b\n\n\n@pytest.mark.parametrize(\"a,b,expected\", [(1, 2, 3), (0, 0, 0)])\ndef test_add(a, b, expected):\n    assert add(a, b) == expected",
            "pytest collects functions prefixed with test_; parametrize runs one test per case.",
            Difficulty::Beginner,
        ),
    ]
}

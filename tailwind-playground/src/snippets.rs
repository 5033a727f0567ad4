//! Static catalog of copyable Tailwind snippets.

use serde::Serialize;

use crate::error::{PlaygroundError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Buttons,
    Cards,
    Forms,
    Navigation,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Buttons,
        Category::Cards,
        Category::Forms,
        Category::Navigation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Buttons => "Buttons",
            Category::Cards => "Cards",
            Category::Forms => "Forms",
            Category::Navigation => "Navigation",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Category::Buttons => "Button Components",
            Category::Cards => "Card Components",
            Category::Forms => "Form Components",
            Category::Navigation => "Navigation Components",
        }
    }

    /// Case-insensitive match on the label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }
}

/// One gallery entry. `code` is both what the card previews and exactly
/// what a copy puts on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub title: &'static str,
    pub category: Category,
    pub code: &'static str,
}

pub fn find(title: &str) -> Result<&'static Snippet> {
    CATALOG
        .iter()
        .find(|s| s.title.eq_ignore_ascii_case(title))
        .ok_or_else(|| PlaygroundError::UnknownSnippet(title.to_string()))
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static Snippet> {
    CATALOG.iter().filter(move |s| s.category == category)
}

pub const CATALOG: &[Snippet] = &[
    Snippet {
        title: "Primary Button",
        category: Category::Buttons,
        code: r#"<button class="bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded">
  Button
</button>"#,
    },
    Snippet {
        title: "Secondary Button",
        category: Category::Buttons,
        code: r#"<button class="bg-transparent hover:bg-blue-500 text-blue-700 font-semibold hover:text-white py-2 px-4 border border-blue-500 hover:border-transparent rounded">
  Button
</button>"#,
    },
    Snippet {
        title: "Disabled Button",
        category: Category::Buttons,
        code: r#"<button class="bg-blue-500 text-white font-bold py-2 px-4 rounded opacity-50 cursor-not-allowed">
  Button
</button>"#,
    },
    Snippet {
        title: "Button with Icon",
        category: Category::Buttons,
        code: r#"<button class="bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded inline-flex items-center">
  <svg class="fill-current w-4 h-4 mr-2" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20"><path d="M13 8V2H7v6H2l8 8 8-8h-5zM0 18h20v2H0v-2z"/></svg>
  <span>Download</span>
</button>"#,
    },
    Snippet {
        title: "Simple Card",
        category: Category::Cards,
        code: r#"<div class="max-w-sm rounded overflow-hidden shadow-lg">
  <div class="px-6 py-4">
    <div class="font-bold text-xl mb-2">The Coldest Sunset</div>
    <p class="text-gray-700 text-base">
      Lorem ipsum dolor sit amet, consectetur adipisicing elit.
    </p>
  </div>
</div>"#,
    },
    Snippet {
        title: "Card with Image",
        category: Category::Cards,
        code: r#"<div class="max-w-sm rounded overflow-hidden shadow-lg">
  <img class="w-full" src="https://images.unsplash.com/photo-1596079890744-c1a0462d0975?auto=format&fit=crop&w=600&h=400" alt="Mountain">
  <div class="px-6 py-4">
    <div class="font-bold text-xl mb-2">Mountain View</div>
    <p class="text-gray-700 text-base">
      A beautiful mountain landscape view.
    </p>
  </div>
</div>"#,
    },
    Snippet {
        title: "Simple Input",
        category: Category::Forms,
        code: r#"<div class="mb-4">
  <label class="block text-gray-700 text-sm font-bold mb-2" for="username">
    Username
  </label>
  <input class="shadow appearance-none border rounded w-full py-2 px-3 text-gray-700 leading-tight focus:outline-none focus:shadow-outline" id="username" type="text" placeholder="Username">
</div>"#,
    },
    Snippet {
        title: "Checkbox",
        category: Category::Forms,
        code: r#"<div class="flex items-center mb-4">
  <input id="default-checkbox" type="checkbox" value="" class="w-4 h-4 text-blue-600 bg-gray-100 border-gray-300 rounded focus:ring-blue-500">
  <label for="default-checkbox" class="ml-2 text-sm font-medium text-gray-900">Default checkbox</label>
</div>"#,
    },
    Snippet {
        title: "Simple Navbar",
        category: Category::Navigation,
        code: r##"<nav class="flex items-center justify-between flex-wrap bg-teal-500 p-6">
  <div class="flex items-center flex-shrink-0 text-white mr-6">
    <span class="font-semibold text-xl tracking-tight">My Website</span>
  </div>
  <div class="w-full block flex-grow lg:flex lg:items-center lg:w-auto">
    <div class="text-sm lg:flex-grow">
      <a href="#responsive-header" class="block mt-4 lg:inline-block lg:mt-0 text-teal-200 hover:text-white mr-4">
        Home
      </a>
      <a href="#responsive-header" class="block mt-4 lg:inline-block lg:mt-0 text-teal-200 hover:text-white mr-4">
        About
      </a>
      <a href="#responsive-header" class="block mt-4 lg:inline-block lg:mt-0 text-teal-200 hover:text-white">
        Contact
      </a>
    </div>
  </div>
</nav>"##,
    },
    Snippet {
        title: "Breadcrumbs",
        category: Category::Navigation,
        code: r##"<nav class="flex" aria-label="Breadcrumb">
  <ol class="inline-flex items-center space-x-1 md:space-x-3">
    <li class="inline-flex items-center">
      <a href="#" class="inline-flex items-center text-sm font-medium text-gray-700 hover:text-blue-600">
        Home
      </a>
    </li>
    <li>
      <div class="flex items-center">
        <svg class="w-3 h-3 text-gray-400 mx-1" aria-hidden="true" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 6 10">
          <path stroke="currentColor" stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="m1 9 4-4-4-4"/>
        </svg>
        <a href="#" class="ml-1 text-sm font-medium text-gray-700 hover:text-blue-600 md:ml-2">Projects</a>
      </div>
    </li>
    <li aria-current="page">
      <div class="flex items-center">
        <svg class="w-3 h-3 text-gray-400 mx-1" aria-hidden="true" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 6 10">
          <path stroke="currentColor" stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="m1 9 4-4-4-4"/>
        </svg>
        <span class="ml-1 text-sm font-medium text-gray-500 md:ml-2">Current</span>
      </div>
    </li>
  </ol>
</nav>"##,
    },
];

use crate::text::normalize;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Sentinel returned when a hint index is outside the authored range
pub const NO_MORE_HINTS: &str = "No hay más pistas disponibles.";
/// Sentinel returned when a word is not in the catalog
pub const WORD_NOT_FOUND: &str = "No se encontró información para esta palabra.";

/// One guessable word with its three progressively revealing hints
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct WordEntry {
    pub word: String,
    pub category: String,
    pub hints: [String; 3],
    pub description: String,
}

impl WordEntry {
    /// N-th authored hint, 1-based, vaguest first
    pub fn hint(&self, n: u32) -> &str {
        match n {
            1..=3 => &self.hints[(n - 1) as usize],
            _ => NO_MORE_HINTS,
        }
    }
}

/// The set of guessable words, unique by normalized word text
#[derive(Clone, Debug)]
pub struct WordCatalog {
    entries: Vec<WordEntry>,
}

impl WordCatalog {
    pub fn new(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    /// The built-in Spanish word list
    pub fn builtin() -> Self {
        Self::new(
            WORDS
                .iter()
                .copied()
                .map(|(word, category, hints, description)| WordEntry {
                    word: word.to_string(),
                    category: category.to_string(),
                    hints: hints.map(str::to_string),
                    description: description.to_string(),
                })
                .collect(),
        )
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Uniform random entry, repeats across rounds are allowed
    pub fn random(&self) -> Option<&WordEntry> {
        self.entries.choose(&mut rand::thread_rng())
    }

    /// Finds an entry by case and diacritic insensitive word text
    pub fn find(&self, word: &str) -> Option<&WordEntry> {
        let word = normalize(word);
        self.entries.iter().find(|e| normalize(&e.word) == word)
    }

    /// Hint text for a word, degrading to a sentinel on a catalog miss
    pub fn hint_for(&self, word: &str, n: u32) -> &str {
        match self.find(word) {
            Some(entry) => entry.hint(n),
            None => WORD_NOT_FOUND,
        }
    }
}

type WordSeed = (&'static str, &'static str, [&'static str; 3], &'static str);

const WORDS: &[WordSeed] = &[
    (
        "mariposa",
        "Animal",
        [
            "Es un insecto que pasa por metamorfosis completa.",
            "Tiene alas coloridas y vuela de flor en flor.",
            "Antes de transformarse, era una oruga.",
        ],
        "La mariposa es un insecto lepidóptero conocido por sus hermosas alas coloridas y su ciclo de vida que incluye la metamorfosis.",
    ),
    (
        "telescopio",
        "Ciencia",
        [
            "Es un instrumento óptico inventado en el siglo XVII.",
            "Galileo Galilei lo usó para observar los astros.",
            "Permite ver objetos muy lejanos en el cielo nocturno.",
        ],
        "El telescopio es un instrumento óptico que permite observar objetos lejanos, especialmente cuerpos celestes como estrellas y planetas.",
    ),
    (
        "biblioteca",
        "Lugar",
        [
            "Es un lugar público o privado con mucho conocimiento.",
            "Aquí puedes encontrar obras de todos los géneros literarios.",
            "Es el hogar de miles de libros organizados por categorías.",
        ],
        "La biblioteca es una institución que almacena, organiza y pone a disposición del público colecciones de libros y otros materiales.",
    ),
    (
        "chocolate",
        "Alimento",
        [
            "Es un producto derivado de una semilla tropical.",
            "Los aztecas lo consideraban el alimento de los dioses.",
            "Es dulce, viene en presentaciones con leche, negro o blanco.",
        ],
        "El chocolate es un alimento derivado del cacao, muy apreciado mundialmente por su sabor dulce y sus múltiples preparaciones.",
    ),
    (
        "arcoiris",
        "Fenómeno natural",
        [
            "Aparece cuando hay sol y lluvia al mismo tiempo.",
            "Tiene siete colores que siempre van en el mismo orden.",
            "Es un fenómeno óptico causado por la refracción de la luz.",
        ],
        "El arcoíris es un fenómeno óptico y meteorológico que produce un espectro de luz en el cielo cuando el sol brilla sobre gotas de agua.",
    ),
    (
        "dinosaurio",
        "Animal extinto",
        [
            "Dominaron la Tierra durante millones de años.",
            "Se extinguieron hace aproximadamente 66 millones de años.",
            "El T-Rex y el Velociraptor son ejemplos famosos.",
        ],
        "Los dinosaurios fueron reptiles que dominaron los ecosistemas terrestres durante la era Mesozoica antes de su extinción masiva.",
    ),
    (
        "girasol",
        "Planta",
        [
            "Es una planta que puede crecer varios metros de altura.",
            "Su nombre describe su comportamiento de seguir al astro rey.",
            "Tiene pétalos amarillos y semillas comestibles en el centro.",
        ],
        "El girasol es una planta herbácea conocida por su gran flor amarilla que gira siguiendo la posición del sol durante el día.",
    ),
    (
        "volcan",
        "Geografía",
        [
            "Es una formación geológica con una abertura en la cima.",
            "Cuando está activo, puede expulsar lava y cenizas.",
            "El Vesubio y el Etna son ejemplos famosos en Europa.",
        ],
        "Un volcán es una estructura geológica por donde emerge magma, gases y fragmentos de roca del interior de la Tierra.",
    ),
    (
        "guitarra",
        "Instrumento musical",
        [
            "Es un instrumento de cuerda muy popular en la música.",
            "Tiene un cuerpo hueco de madera con forma de ocho.",
            "Se toca pulsando seis cuerdas con los dedos o una púa.",
        ],
        "La guitarra es un instrumento musical de cuerda pulsada, fundamental en géneros como el flamenco, rock, pop y música clásica.",
    ),
    (
        "piramide",
        "Arquitectura",
        [
            "Es una construcción monumental de forma geométrica.",
            "Las más famosas se encuentran en Egipto y México.",
            "Los faraones las usaban como tumbas monumentales.",
        ],
        "Las pirámides son estructuras arquitectónicas con base poligonal y caras triangulares, famosas especialmente en el antiguo Egipto.",
    ),
    (
        "relampago",
        "Fenómeno natural",
        [
            "Es un fenómeno atmosférico durante las tormentas.",
            "Produce una luz intensa que dura fracciones de segundo.",
            "Generalmente viene acompañado de un fuerte estruendo.",
        ],
        "El relámpago es una descarga eléctrica atmosférica que produce un destello luminoso intenso durante las tormentas eléctricas.",
    ),
    (
        "camaleon",
        "Animal",
        [
            "Es un reptil conocido por una habilidad muy especial.",
            "Puede mover sus ojos de forma independiente.",
            "Cambia el color de su piel según su estado o entorno.",
        ],
        "El camaleón es un reptil escamoso famoso por su capacidad de cambiar de color y por su lengua extremadamente larga y pegajosa.",
    ),
    (
        "laberinto",
        "Estructura",
        [
            "Es un lugar diseñado para confundir y desorientar.",
            "En la mitología griega, uno famoso contenía al Minotauro.",
            "Tiene muchos caminos y pasajes sin salida.",
        ],
        "Un laberinto es una construcción con múltiples caminos interconectados diseñados para dificultar encontrar la salida o el centro.",
    ),
    (
        "astronauta",
        "Profesión",
        [
            "Es una profesión que requiere años de entrenamiento especial.",
            "Su lugar de trabajo está fuera de nuestro planeta.",
            "Neil Armstrong fue el primero en pisar la Luna.",
        ],
        "Un astronauta es un profesional entrenado para viajar y trabajar en el espacio exterior, operando naves y realizando investigaciones.",
    ),
    (
        "cascada",
        "Geografía",
        [
            "Es una formación natural donde el agua cae verticalmente.",
            "Las Cataratas del Niágara son un ejemplo famoso.",
            "Se forma cuando un río encuentra un desnivel pronunciado.",
        ],
        "Una cascada es una caída de agua desde cierta altura, producida por un desnivel brusco en el cauce de un río o arroyo.",
    ),
    (
        "orquesta",
        "Música",
        [
            "Es un conjunto de músicos que tocan juntos.",
            "Incluye instrumentos de cuerda, viento y percusión.",
            "Es dirigida por una persona con una batuta.",
        ],
        "Una orquesta es un conjunto de músicos que interpretan obras musicales bajo la dirección de un director de orquesta.",
    ),
    (
        "submarino",
        "Vehículo",
        [
            "Es un vehículo diseñado para un ambiente especial.",
            "Puede permanecer bajo el agua durante largos períodos.",
            "Se usa para exploración marina y fines militares.",
        ],
        "El submarino es una embarcación capaz de navegar bajo la superficie del agua, utilizado para exploración, investigación y defensa.",
    ),
    (
        "canguro",
        "Animal",
        [
            "Es un mamífero originario de un continente isla.",
            "Se desplaza dando grandes saltos con sus patas traseras.",
            "Las hembras llevan a sus crías en una bolsa llamada marsupio.",
        ],
        "El canguro es un marsupial australiano conocido por sus potentes patas traseras, su cola y la bolsa donde desarrollan sus crías.",
    ),
    (
        "brujula",
        "Instrumento",
        [
            "Es un instrumento de navegación muy antiguo.",
            "Funciona gracias al campo magnético de la Tierra.",
            "Su aguja siempre señala hacia el norte.",
        ],
        "La brújula es un instrumento de orientación que utiliza una aguja magnetizada para señalar el norte magnético terrestre.",
    ),
    (
        "maratón",
        "Deporte",
        [
            "Es una prueba atlética de resistencia extrema.",
            "Su nombre proviene de una antigua batalla griega.",
            "La distancia oficial es de 42.195 kilómetros.",
        ],
        "El maratón es una carrera de larga distancia que conmemora la legendaria carrera de Filípides desde Maratón hasta Atenas.",
    ),
];

//! # Dictionary
//!
//! The fixed word list behind the `Word{n}L` letter trait. Kept sorted so
//! membership is a binary search over static data.

/// Known English words, lowercase ASCII, sorted.
pub const WORDS: &[&str] = &[
    "able", "about", "above", "ace", "acid", "act", "action", "actor", "add", "adult", "after",
    "again", "age", "aged", "agent", "ago", "agree", "ahead", "aid", "aim", "air", "alarm",
    "album", "alert", "alien", "alike", "alive", "all", "allow", "alone", "along", "also",
    "alter", "am", "amber", "among", "an", "anchor", "and", "angel", "anger", "angle", "angry",
    "animal", "answer", "ant", "any", "ape", "app", "apple", "apply", "arc", "archer", "are",
    "area", "arena", "argue", "arise", "ark", "arm", "armor", "army", "array", "arrow", "art",
    "artist", "as", "ash", "aside", "ask", "asset", "at", "ate", "audio", "audit", "autumn",
    "avoid", "award", "aware", "away", "awe", "axe", "baby", "back", "bad", "badge", "bag",
    "bake", "baker", "balance", "ball", "ban", "banana", "band", "bank", "bar", "base", "basic",
    "bat", "bath", "battery", "battle", "bay", "be", "beach", "bear", "beast", "beat", "beauty",
    "bed", "bee", "been", "beer", "before", "beg", "begin", "being", "bell", "below", "belt",
    "bench", "berry", "best", "bet", "better", "bid", "big", "bike", "bill", "bin", "bird",
    "birth", "bishop", "bit", "bite", "bitter", "black", "blade", "blame", "blank", "blanket",
    "blast", "blaze", "blend", "bless", "blind", "block", "blood", "bloom", "blow", "blue",
    "board", "boat", "body", "bold", "bond", "bone", "book", "boom", "boost", "boot", "booth",
    "born", "boss", "both", "bottle", "bounce", "bow", "bowl", "box", "boy", "brain", "branch",
    "brand", "brave", "bread", "break", "breeze", "brick", "bride", "bridge", "brief", "bright",
    "bring", "broad", "broken", "brother", "brown", "brush", "bubble", "bucket", "budget", "bug",
    "build", "bulk", "bun", "bunch", "burn", "bus", "bush", "busy", "but", "butter", "button",
    "buy", "buyer", "by", "cab", "cabin", "cabinet", "cable", "cake", "call", "calm", "came",
    "camel", "camera", "camp", "can", "candy", "canvas", "cap", "captain", "car", "carbon",
    "card", "care", "cargo", "carry", "cart", "case", "cash", "cast", "castle", "cat", "catch",
    "cattle", "cause", "cell", "center", "central", "century", "chain", "chair", "chance",
    "change", "chaos", "charge", "charm", "chart", "chase", "chat", "cheap", "check", "chef",
    "cherry", "chess", "chest", "chicken", "chief", "child", "chill", "chip", "choice", "choir",
    "circle", "city", "civil", "claim", "class", "clay", "clean", "clear", "clerk", "clever",
    "click", "client", "cliff", "climate", "climb", "clock", "close", "cloud", "club", "coach",
    "coal", "coast", "coat", "code", "coffee", "coin", "cold", "collar", "colony", "combat",
    "come", "compass", "concert", "cook", "cool", "cope", "copper", "copy", "coral", "core",
    "corn", "corner", "cost", "cotton", "couch", "council", "count", "country", "court", "cousin",
    "cover", "cow", "coyote", "craft", "crane", "crash", "crayon", "crazy", "cream", "credit",
    "crew", "crime", "crisp", "crop", "cross", "crowd", "crown", "crude", "cruise", "cry",
    "crystal", "cub", "culture", "cup", "custom", "cut", "cycle", "dad", "daily", "dam", "dance",
    "danger", "dark", "data", "date", "dawn", "day", "dead", "deal", "dealer", "dear", "debate",
    "debt", "decade", "deck", "deep", "deer", "defend", "degree", "delta", "den", "depth",
    "design", "desire", "desk", "detail", "devil", "dew", "dial", "diamond", "diary", "did",
    "die", "diet", "dig", "digital", "dim", "dinner", "dip", "dirt", "dish", "dive", "do",
    "doctor", "dog", "dollar", "dolphin", "domain", "donkey", "door", "dose", "dot", "double",
    "down", "dozen", "draft", "dragon", "drama", "draw", "dream", "dress", "drew", "drink",
    "drive", "driver", "drop", "drum", "dry", "duck", "due", "dug", "dust", "duty", "dye", "each",
    "eager", "eagle", "ear", "early", "earn", "earth", "ease", "easily", "east", "eastern",
    "easy", "eat", "economy", "edge", "editor", "effect", "effort", "egg", "ego", "eight",
    "element", "eleven", "elf", "elite", "elk", "else", "empire", "empty", "end", "enemy",
    "energy", "engine", "enjoy", "enough", "enter", "entry", "epic", "equal", "era", "error",
    "escape", "eve", "even", "event", "ever", "every", "evil", "evolve", "exact", "example",
    "exist", "exit", "expert", "extra", "eye", "fabric", "face", "fact", "factor", "factory",
    "fail", "fair", "faith", "falcon", "fall", "false", "fame", "family", "fan", "fancy", "far",
    "farm", "farmer", "fashion", "fast", "fat", "fate", "father", "fax", "fear", "feast", "fed",
    "fee", "feed", "feel", "feet", "fell", "fellow", "felt", "fence", "fever", "few", "fiber",
    "fiction", "field", "fifth", "fifty", "fig", "fight", "figure", "file", "fill", "film", "fin",
    "final", "find", "fine", "finger", "finish", "fir", "fire", "firm", "first", "fish", "fit",
    "five", "fix", "flag", "flame", "flash", "flat", "fleet", "flesh", "flight", "float", "flood",
    "floor", "flour", "flow", "flower", "fluid", "fly", "focus", "foe", "fog", "folk", "follow",
    "food", "foot", "for", "force", "forest", "forge", "form", "formal", "fort", "forth", "forum",
    "fossil", "found", "four", "fox", "frame", "free", "freedom", "fresh", "friend", "fringe",
    "frog", "from", "front", "frost", "frozen", "fruit", "fry", "fuel", "full", "fun", "fund",
    "funny", "fur", "future", "gain", "galaxy", "gallery", "game", "gap", "garden", "gas", "gate",
    "gave", "gear", "gem", "general", "gentle", "genuine", "get", "ghost", "giant", "gift", "gig",
    "gin", "ginger", "girl", "give", "given", "glad", "glass", "global", "globe", "glory", "go",
    "goal", "goat", "god", "gold", "golden", "golf", "gone", "good", "gossip", "got", "grace",
    "grade", "grain", "grand", "grant", "grape", "grass", "gray", "great", "green", "greet",
    "grew", "grid", "group", "grow", "growth", "guard", "guess", "guest", "guide", "guitar",
    "gulf", "gum", "gun", "gut", "guy", "gym", "habit", "had", "hair", "half", "hall", "ham",
    "hammer", "hand", "handle", "hang", "happy", "harbor", "hard", "harm", "harmony", "has",
    "hat", "hate", "have", "hay", "he", "head", "health", "hear", "heart", "heat", "heaven",
    "heavy", "held", "hell", "hello", "helmet", "help", "hen", "her", "here", "hero", "hey", "hi",
    "hid", "hidden", "hide", "high", "hill", "him", "hint", "hip", "hire", "his", "history",
    "hit", "hobby", "hockey", "hog", "hold", "hole", "holiday", "holy", "home", "honest", "honey",
    "honor", "hop", "hope", "horn", "horse", "host", "hot", "hotel", "hour", "house", "how",
    "hub", "hue", "hug", "huge", "human", "humor", "hunt", "hunter", "hurt", "hut", "ice", "icy",
    "idea", "ideal", "if", "ill", "image", "imagine", "impact", "in", "inch", "index", "ink",
    "inn", "inner", "input", "into", "ion", "iron", "is", "island", "issue", "it", "item", "its",
    "ivory", "ivy", "jacket", "jam", "jar", "jaw", "jazz", "jelly", "jersey", "jet", "jewel",
    "job", "jog", "join", "joint", "joke", "journey", "joy", "judge", "jug", "juice", "jump",
    "jungle", "junior", "jury", "just", "justice", "keen", "keep", "kept", "kernel", "key",
    "kick", "kid", "kin", "kind", "king", "kiss", "kit", "kitchen", "kitten", "knee", "knew",
    "knife", "know", "known", "lab", "label", "labor", "lack", "lad", "ladder", "lady", "laid",
    "lake", "lamp", "land", "lane", "lap", "large", "laser", "last", "late", "later", "laugh",
    "launch", "law", "lay", "layer", "lead", "leader", "leaf", "lean", "learn", "lease", "least",
    "leave", "left", "leg", "legal", "legend", "lemon", "lend", "lens", "less", "lesson", "let",
    "letter", "level", "library", "lid", "lie", "life", "lift", "light", "like", "lime", "limit",
    "line", "linen", "link", "lion", "lip", "liquid", "list", "lit", "live", "lizard", "load",
    "loan", "local", "lock", "log", "logic", "logo", "long", "look", "loose", "lord", "lose",
    "loss", "lost", "lot", "loud", "lounge", "love", "lover", "low", "lower", "loyal", "luck",
    "lucky", "lunar", "lunch", "lung", "luxury", "machine", "mad", "made", "magic", "magnet",
    "mail", "main", "major", "make", "maker", "male", "mall", "man", "many", "map", "maple",
    "march", "mark", "market", "mars", "mass", "master", "mat", "match", "matter", "may", "mayor",
    "me", "meadow", "meal", "mean", "meat", "medal", "media", "meet", "member", "memory", "men",
    "mentor", "menu", "mercy", "met", "metal", "meter", "method", "middle", "might", "mild",
    "milk", "mind", "mine", "minor", "mirror", "miss", "mission", "mix", "mob", "mobile", "mode",
    "model", "modern", "mom", "moment", "money", "monkey", "monster", "month", "mood", "moon",
    "moral", "more", "morning", "most", "mother", "motion", "motor", "mount", "mouse", "mouth",
    "move", "movie", "much", "mud", "mug", "museum", "music", "must", "my", "name", "nap",
    "natural", "nature", "navy", "near", "nearby", "neck", "need", "needle", "nerve", "net",
    "network", "never", "new", "news", "next", "nice", "nickel", "night", "nine", "ninja", "no",
    "noble", "nod", "node", "noise", "none", "noon", "norm", "normal", "north", "nose", "not",
    "note", "nothing", "notice", "novel", "now", "number", "nurse", "nut", "oak", "oar", "oat",
    "obey", "object", "ocean", "odd", "odds", "of", "off", "offer", "office", "often", "oh",
    "oil", "ok", "okay", "old", "olive", "on", "once", "one", "onion", "online", "only", "open",
    "opera", "or", "orange", "orb", "orbit", "orchard", "order", "ore", "origin", "other", "our",
    "out", "outer", "output", "oven", "over", "owl", "own", "owner", "ox", "oxygen", "pace",
    "pack", "package", "pad", "page", "paid", "pain", "painter", "pair", "palace", "palm", "pan",
    "panel", "panic", "panther", "paper", "parade", "parent", "park", "part", "partner", "party",
    "pass", "passion", "past", "pasta", "patch", "path", "paw", "pay", "pea", "peace", "peak",
    "pearl", "pedal", "pen", "penguin", "penny", "pepper", "person", "pet", "phase", "phone",
    "photo", "piano", "pick", "picture", "pie", "piece", "pig", "pile", "pilot", "pin", "pink",
    "pioneer", "pipe", "pit", "pitch", "pixel", "pizza", "place", "plain", "plan", "plane",
    "planet", "plant", "plastic", "plate", "play", "player", "plot", "plus", "pocket", "pod",
    "poem", "poet", "poetry", "point", "polar", "pole", "policy", "poll", "pond", "pool", "poor",
    "pop", "popular", "port", "pose", "post", "pot", "potato", "pour", "powder", "power", "pray",
    "premium", "press", "price", "pride", "prime", "prince", "print", "prize", "pro", "profit",
    "project", "proof", "proud", "prove", "pub", "public", "pull", "pulse", "pun", "punch", "pup",
    "pupil", "pure", "push", "put", "puzzle", "pyramid", "quality", "quantum", "queen", "quick",
    "quiet", "quit", "quote", "rabbit", "race", "radar", "radio", "rag", "rail", "rain",
    "rainbow", "raise", "ram", "ran", "range", "rank", "rap", "rapid", "rare", "rat", "rate",
    "rather", "ratio", "raw", "ray", "reach", "react", "read", "ready", "real", "reality",
    "realm", "rebel", "record", "red", "refer", "region", "relax", "rely", "remote", "rent",
    "reply", "rescue", "rest", "result", "rib", "ribbon", "rice", "rich", "rid", "ride", "rider",
    "ridge", "rifle", "rig", "right", "rim", "ring", "rip", "rise", "risk", "rival", "river",
    "road", "rob", "robot", "rock", "rocket", "rocky", "rod", "role", "roll", "rolls", "roof",
    "room", "root", "rope", "rose", "rot", "round", "route", "row", "royal", "rub", "rug", "rule",
    "run", "rural", "rush", "sad", "safe", "safety", "sag", "said", "sail", "sake", "salad",
    "salmon", "salt", "same", "sample", "sand", "sat", "sauce", "save", "saw", "say", "scale",
    "scene", "school", "science", "scope", "score", "screen", "script", "sea", "search", "season",
    "seat", "secret", "see", "seed", "seek", "seem", "seen", "select", "self", "sell", "send",
    "senior", "sense", "serve", "session", "set", "seven", "sew", "shade", "shadow", "shake",
    "shape", "share", "shark", "sharp", "she", "sheep", "shelf", "shell", "shift", "shine",
    "ship", "shirt", "shock", "shoe", "shop", "shore", "short", "shot", "shout", "show", "shut",
    "shy", "sick", "side", "sight", "sign", "silent", "silk", "silly", "silver", "simple", "sin",
    "sing", "singer", "sink", "sip", "sir", "sister", "sit", "site", "six", "size", "ski",
    "skill", "skin", "skull", "sky", "sleep", "slice", "slide", "slip", "slow", "sly", "smart",
    "smile", "smoke", "smooth", "snake", "snow", "so", "soccer", "social", "society", "soft",
    "soil", "solar", "sold", "soldier", "sole", "solid", "solve", "some", "son", "song", "soon",
    "sort", "soul", "sound", "source", "south", "soy", "spa", "space", "spare", "speak",
    "speaker", "speed", "spell", "spend", "spice", "spider", "spike", "spin", "spine", "spirit",
    "spoon", "sport", "spot", "spray", "spring", "spy", "squad", "square", "stable", "staff",
    "stage", "stake", "stand", "star", "start", "state", "station", "stay", "steam", "steel",
    "step", "stick", "still", "stock", "stone", "stop", "store", "storm", "story", "stove",
    "stream", "street", "strike", "string", "strip", "strong", "student", "studio", "study",
    "stuff", "style", "success", "such", "sugar", "suit", "suite", "summer", "summit", "sun",
    "sunny", "sunrise", "sunset", "super", "supply", "sure", "sweet", "swift", "swim", "sword",
    "symbol", "system", "tab", "table", "tablet", "tag", "tail", "take", "tale", "talent", "talk",
    "tall", "tan", "tank", "tap", "tape", "tar", "target", "task", "taste", "tax", "tea", "teach",
    "teacher", "team", "tell", "temple", "ten", "tend", "tennis", "term", "test", "text", "than",
    "thank", "that", "the", "theater", "them", "theme", "then", "there", "they", "thick", "thief",
    "thin", "thing", "think", "third", "thirty", "this", "three", "throw", "thumb", "thunder",
    "thus", "ticket", "tide", "tie", "tiger", "tight", "timber", "timer", "tin", "tiny", "tip",
    "title", "to", "toast", "today", "toe", "token", "told", "tomato", "ton", "tone", "tonight",
    "too", "took", "tool", "tooth", "top", "topic", "torch", "total", "touch", "tough", "tour",
    "tourist", "tower", "town", "toxic", "toy", "trace", "track", "trade", "trail", "train",
    "trait", "travel", "treat", "treaty", "tree", "trend", "trial", "tribe", "trick", "trip",
    "trouble", "truck", "true", "truly", "trust", "truth", "try", "tub", "tube", "tug", "tune",
    "tunnel", "turn", "turtle", "twenty", "twice", "twin", "twist", "two", "type", "ultra",
    "uncle", "under", "uniform", "union", "unique", "unit", "unity", "unknown", "until", "up",
    "update", "upon", "upper", "upset", "urban", "us", "usage", "use", "used", "useful", "user",
    "usual", "valid", "valley", "value", "van", "vapor", "vast", "vat", "vault", "vehicle",
    "velvet", "venus", "verse", "verve", "very", "vet", "via", "victory", "video", "view",
    "vigor", "village", "vintage", "violet", "viral", "virus", "vision", "visit", "vital",
    "vivid", "vocal", "voice", "volcano", "volume", "vote", "vow", "wage", "wagon", "wait",
    "wake", "walk", "wall", "walnut", "want", "war", "warm", "was", "wash", "waste", "watch",
    "water", "wave", "wax", "way", "we", "weak", "wealth", "weapon", "wear", "weather", "web",
    "wed", "week", "welcome", "well", "went", "were", "west", "western", "wet", "whale", "what",
    "wheat", "wheel", "when", "where", "which", "while", "whisper", "white", "who", "whole",
    "whom", "why", "wide", "width", "wife", "wig", "wild", "will", "win", "wind", "wine", "wing",
    "winter", "wire", "wisdom", "wise", "wish", "wit", "with", "without", "woe", "wolf", "woman",
    "won", "wonder", "wood", "wool", "word", "wore", "work", "world", "worry", "worth", "would",
    "wound", "wow", "write", "wrong", "yak", "yam", "yard", "yeah", "year", "yellow", "yes",
    "yet", "yield", "yoga", "you", "young", "youth", "zap", "zebra", "zen", "zero", "zip",
    "zombie", "zone", "zoo",
];

/// Whether `word` is in the dictionary. Matching is exact and
/// case-sensitive; callers lowercase first.
pub fn contains(word: &str) -> bool {
    WORDS.binary_search(&word).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_and_unique() {
        assert!(WORDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_lowercase_ascii() {
        assert!(WORDS
            .iter()
            .all(|w| !w.is_empty() && w.bytes().all(|b| b.is_ascii_lowercase())));
    }

    #[test]
    fn test_membership() {
        assert!(contains("me"));
        assert!(contains("fringe"));
        assert!(!contains("Me"));
        assert!(!contains("pooop"));
        assert!(!contains(""));
    }
}
